use crate::core::cascade::CodeLookup;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MainCode {
    pub id: i64,
    pub code: String, // unique
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubCode {
    pub id: i64,
    pub main_code_id: i64,
    pub code: String, // unique within main_code_id
    pub name: String,
}

/// The two-level activity code taxonomy, loaded once per command.
#[derive(Debug, Clone, Default)]
pub struct Taxonomy {
    pub main_codes: Vec<MainCode>,
    pub sub_codes: Vec<SubCode>,
}

impl Taxonomy {
    pub fn main_by_code(&self, code: &str) -> Option<&MainCode> {
        self.main_codes
            .iter()
            .find(|m| m.code.eq_ignore_ascii_case(code.trim()))
    }

    pub fn main_by_id(&self, id: i64) -> Option<&MainCode> {
        self.main_codes.iter().find(|m| m.id == id)
    }

    pub fn sub_by_id(&self, id: i64) -> Option<&SubCode> {
        self.sub_codes.iter().find(|s| s.id == id)
    }

    /// Sub codes offered for an entry whose main code is `main_code_id`.
    pub fn sub_candidates(&self, main_code_id: i64) -> impl Iterator<Item = &SubCode> {
        self.sub_codes
            .iter()
            .filter(move |s| s.main_code_id == main_code_id)
    }

    /// Resolve a sub code by its short code, among the candidates only.
    pub fn sub_by_code(&self, main_code_id: i64, code: &str) -> Option<&SubCode> {
        self.sub_candidates(main_code_id)
            .find(|s| s.code.eq_ignore_ascii_case(code.trim()))
    }

    /// "MAIN" / "MAIN/SUB" label for display.
    pub fn label(&self, main: Option<i64>, sub: Option<i64>) -> String {
        let main_code = main
            .and_then(|id| self.main_by_id(id))
            .map(|m| m.code.as_str());
        let sub_code = sub.and_then(|id| self.sub_by_id(id)).map(|s| s.code.as_str());

        match (main_code, sub_code) {
            (Some(m), Some(s)) => format!("{}/{}", m, s),
            (Some(m), None) => m.to_string(),
            _ => "--".to_string(),
        }
    }
}

impl CodeLookup for Taxonomy {
    fn sub_code_parent(&self, sub_code_id: i64) -> Option<i64> {
        self.sub_by_id(sub_code_id).map(|s| s.main_code_id)
    }
}
