//! Content-completeness check.
//!
//! The page has no runtime failure modes; a short or blank content list is a
//! content defect. List lengths of the built-in content are already pinned by
//! const assertions in [`crate::content`]; [`check_content`] repeats that
//! check for any [`SiteContent`] value and also rejects empty text fields.

use thiserror::Error;

use crate::content::{
    CLOSING_ACTION_COUNT, FEATURE_COUNT, FOOTER_COLUMN_COUNT, HERO_ACTION_COUNT, NAV_LINK_COUNT,
    STAT_COUNT, SiteContent,
};

/// A defect in the literal page content.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    /// A list has the wrong number of entries
    #[error("{list}: expected {expected} entries, found {found}")]
    Cardinality {
        /// Name of the list
        list: &'static str,
        /// Required number of entries
        expected: usize,
        /// Actual number of entries
        found: usize,
    },
    /// An entry has a blank text field
    #[error("{list}[{index}]: `{field}` is empty")]
    EmptyField {
        /// Name of the list
        list: &'static str,
        /// Position of the entry in the list
        index: usize,
        /// Name of the blank field
        field: &'static str,
    },
}

fn expect_len(list: &'static str, found: usize, expected: usize) -> Result<(), ContentError> {
    if found == expected {
        Ok(())
    } else {
        Err(ContentError::Cardinality {
            list,
            expected,
            found,
        })
    }
}

fn expect_text(
    list: &'static str,
    index: usize,
    field: &'static str,
    value: &str,
) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        Err(ContentError::EmptyField { list, index, field })
    } else {
        Ok(())
    }
}

/// Validate every list in `content`. Returns the first defect found.
pub fn check_content(content: &SiteContent) -> Result<(), ContentError> {
    expect_len("nav_links", content.nav_links.len(), NAV_LINK_COUNT)?;
    for (i, link) in content.nav_links.iter().enumerate() {
        expect_text("nav_links", i, "label", link.label)?;
        expect_text("nav_links", i, "href", link.href)?;
    }

    expect_len(
        "footer_columns",
        content.footer_columns.len(),
        FOOTER_COLUMN_COUNT,
    )?;
    for (i, column) in content.footer_columns.iter().enumerate() {
        expect_text("footer_columns", i, "heading", column.heading)?;
        if column.links.is_empty() {
            return Err(ContentError::EmptyField {
                list: "footer_columns",
                index: i,
                field: "links",
            });
        }
        for link in column.links {
            expect_text("footer_columns", i, "links.label", link.label)?;
            expect_text("footer_columns", i, "links.href", link.href)?;
        }
    }

    expect_len("features", content.features.len(), FEATURE_COUNT)?;
    for (i, feature) in content.features.iter().enumerate() {
        expect_text("features", i, "icon", feature.icon)?;
        expect_text("features", i, "title", feature.title)?;
        expect_text("features", i, "description", feature.description)?;
        expect_text("features", i, "body", feature.body)?;
    }

    expect_len("stats", content.stats.len(), STAT_COUNT)?;
    for (i, stat) in content.stats.iter().enumerate() {
        expect_text("stats", i, "value", stat.value)?;
        expect_text("stats", i, "caption", stat.caption)?;
    }

    expect_len("hero_actions", content.hero_actions.len(), HERO_ACTION_COUNT)?;
    for (i, label) in content.hero_actions.iter().enumerate() {
        expect_text("hero_actions", i, "label", label)?;
    }

    expect_len(
        "closing_actions",
        content.closing_actions.len(),
        CLOSING_ACTION_COUNT,
    )?;
    for (i, label) in content.closing_actions.iter().enumerate() {
        expect_text("closing_actions", i, "label", label)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{FEATURES, Feature, STATS};
    use pretty_assertions::assert_eq;

    #[test]
    fn built_in_content_is_complete() {
        assert_eq!(check_content(&SiteContent::QNOM), Ok(()));
    }

    #[test]
    fn rejects_missing_stat() {
        let content = SiteContent {
            stats: &STATS[..3],
            ..SiteContent::QNOM
        };
        assert_eq!(
            check_content(&content),
            Err(ContentError::Cardinality {
                list: "stats",
                expected: 4,
                found: 3,
            })
        );
    }

    #[test]
    fn rejects_extra_feature() {
        const FOUR: &[Feature] = &[FEATURES[0], FEATURES[1], FEATURES[2], FEATURES[0]];
        let content = SiteContent {
            features: FOUR,
            ..SiteContent::QNOM
        };
        let err = check_content(&content).unwrap_err();
        assert_eq!(err.to_string(), "features: expected 3 entries, found 4");
    }

    #[test]
    fn rejects_blank_feature_body() {
        const BLANK: &[Feature] = &[
            FEATURES[0],
            Feature {
                body: "  ",
                ..FEATURES[1]
            },
            FEATURES[2],
        ];
        let content = SiteContent {
            features: BLANK,
            ..SiteContent::QNOM
        };
        assert_eq!(
            check_content(&content),
            Err(ContentError::EmptyField {
                list: "features",
                index: 1,
                field: "body",
            })
        );
    }

    #[test]
    fn rejects_blank_action_label() {
        let content = SiteContent {
            closing_actions: &[""],
            ..SiteContent::QNOM
        };
        let err = check_content(&content).unwrap_err();
        assert_eq!(err.to_string(), "closing_actions[0]: `label` is empty");
    }
}
