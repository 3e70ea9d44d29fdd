//! QuadrantRecord and Worksheet value objects.

use serde::{Deserialize, Serialize};

use super::Quadrant;

/// The four free-text quadrant fields.
///
/// Fields are never null; an unanswered quadrant is an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuadrantRecord {
    pub keep_pros: String,
    pub keep_cons: String,
    pub change_cons: String,
    pub change_pros: String,
}

impl QuadrantRecord {
    /// Creates a record from the four texts in wizard order.
    pub fn new(
        keep_pros: impl Into<String>,
        keep_cons: impl Into<String>,
        change_cons: impl Into<String>,
        change_pros: impl Into<String>,
    ) -> Self {
        Self {
            keep_pros: keep_pros.into(),
            keep_cons: keep_cons.into(),
            change_cons: change_cons.into(),
            change_pros: change_pros.into(),
        }
    }

    /// Returns the text of one quadrant.
    pub fn get(&self, quadrant: Quadrant) -> &str {
        match quadrant {
            Quadrant::KeepPros => &self.keep_pros,
            Quadrant::KeepCons => &self.keep_cons,
            Quadrant::ChangeCons => &self.change_cons,
            Quadrant::ChangePros => &self.change_pros,
        }
    }

    /// Replaces the text of one quadrant.
    pub fn set(&mut self, quadrant: Quadrant, text: impl Into<String>) {
        let slot = match quadrant {
            Quadrant::KeepPros => &mut self.keep_pros,
            Quadrant::KeepCons => &mut self.keep_cons,
            Quadrant::ChangeCons => &mut self.change_cons,
            Quadrant::ChangePros => &mut self.change_pros,
        };
        *slot = text.into();
    }

    /// True when every quadrant is empty.
    pub fn is_empty(&self) -> bool {
        Quadrant::all().iter().all(|q| self.get(*q).is_empty())
    }
}

/// The unit of work for one session: theme, quadrants and optional analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Worksheet {
    pub theme: String,
    pub record: QuadrantRecord,
    pub analysis: Option<String>,
}

impl Worksheet {
    /// Creates an empty worksheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a worksheet with a theme and record but no analysis.
    pub fn with_record(theme: impl Into<String>, record: QuadrantRecord) -> Self {
        Self {
            theme: theme.into(),
            record,
            analysis: None,
        }
    }

    /// True once the theme has non-whitespace content.
    ///
    /// Only such worksheets may be committed to history.
    pub fn has_theme(&self) -> bool {
        !self.theme.trim().is_empty()
    }

    /// Resets theme, quadrants and analysis.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_is_all_empty() {
        let record = QuadrantRecord::default();
        assert!(record.is_empty());
        for quadrant in Quadrant::all() {
            assert_eq!(record.get(*quadrant), "");
        }
    }

    #[test]
    fn set_then_get_touches_only_that_quadrant() {
        let mut record = QuadrantRecord::default();
        record.set(Quadrant::ChangeCons, "Risk of failure");

        assert_eq!(record.get(Quadrant::ChangeCons), "Risk of failure");
        assert_eq!(record.get(Quadrant::KeepPros), "");
        assert_eq!(record.get(Quadrant::KeepCons), "");
        assert_eq!(record.get(Quadrant::ChangePros), "");
        assert!(!record.is_empty());
    }

    #[test]
    fn record_serializes_with_camel_case_keys() {
        let record = QuadrantRecord::new("a", "b", "c", "d");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["keepPros"], "a");
        assert_eq!(json["keepCons"], "b");
        assert_eq!(json["changeCons"], "c");
        assert_eq!(json["changePros"], "d");
    }

    #[test]
    fn record_deserializes_missing_keys_as_empty() {
        let record: QuadrantRecord = serde_json::from_str(r#"{"keepPros":"only"}"#).unwrap();
        assert_eq!(record.keep_pros, "only");
        assert_eq!(record.change_pros, "");
    }

    #[test]
    fn has_theme_ignores_whitespace() {
        let mut worksheet = Worksheet::new();
        assert!(!worksheet.has_theme());

        worksheet.theme = " \t\n".to_string();
        assert!(!worksheet.has_theme());

        worksheet.theme = " Move abroad? ".to_string();
        assert!(worksheet.has_theme());
    }

    #[test]
    fn clear_resets_everything() {
        let mut worksheet =
            Worksheet::with_record("Quit?", QuadrantRecord::new("a", "b", "c", "d"));
        worksheet.analysis = Some("text".to_string());

        worksheet.clear();
        assert_eq!(worksheet, Worksheet::new());
    }
}
