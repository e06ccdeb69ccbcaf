//! Category Table
//!
//! Compiled, ordered and read-only view of the category definitions.

use colored::Color;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::TableConfig;
use crate::error::{Result, StimaError};

use super::builtin::{CategoryDef, BUILTIN_CATEGORIES};

static BUILTIN_TABLE: Lazy<CategoryTable> = Lazy::new(|| {
    let defs = BUILTIN_CATEGORIES.iter().map(CategoryDef::from).collect();
    CategoryTable::from_defs(defs)
        .unwrap_or_else(|e| panic!("builtin category table does not compile: {}", e))
});

/// Compile a pattern body into a case-insensitive regex anchored behind one
/// whitespace character.
pub fn compile_pattern(key: &str, body: &str) -> Result<Regex> {
    Regex::new(&format!(r"(?i)\s{}", body)).map_err(|source| StimaError::InvalidPattern {
        key: key.to_string(),
        pattern: body.to_string(),
        source,
    })
}

/// A compiled category
#[derive(Debug, Clone)]
pub struct Category {
    key: String,
    color: Color,
    patterns: Vec<Regex>,
    help: Vec<String>,
}

impl Category {
    /// Compile a definition
    pub fn compile(def: CategoryDef) -> Result<Self> {
        if def.help.len() != def.patterns.len() {
            return Err(StimaError::HelpMismatch {
                key: def.key,
                patterns: def.patterns.len(),
                help: def.help.len(),
            });
        }

        let patterns = def
            .patterns
            .iter()
            .map(|body| compile_pattern(&def.key, body))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            key: def.key,
            color: def.color,
            patterns,
            help: def.help,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn patterns(&self) -> &[Regex] {
        &self.patterns
    }

    pub fn help(&self) -> &[String] {
        &self.help
    }
}

/// Ordered category table
///
/// The order is the rewrite precedence and the explain order; the counts
/// summary walks it backwards.
#[derive(Debug, Clone)]
pub struct CategoryTable {
    categories: Vec<Category>,
}

impl CategoryTable {
    /// The builtin table, compiled once per process
    pub fn builtin() -> Self {
        BUILTIN_TABLE.clone()
    }

    /// Compile definitions in the given order
    pub fn from_defs(defs: Vec<CategoryDef>) -> Result<Self> {
        let categories = defs
            .into_iter()
            .map(Category::compile)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { categories })
    }

    /// Override with a table config
    ///
    /// - Existing keys are replaced in place
    /// - New keys are appended
    pub fn with_config(mut self, config: &TableConfig) -> Result<Self> {
        for def in config.to_defs()? {
            let category = Category::compile(def)?;
            match self.categories.iter_mut().find(|c| c.key == category.key) {
                Some(existing) => *existing = category,
                None => self.categories.push(category),
            }
        }
        Ok(self)
    }

    /// Categories in table order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, key: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.key == key)
    }

    pub fn keys(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.key.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CategoryConfigEntry;

    #[test]
    fn test_builtin_table_order() {
        let table = CategoryTable::builtin();
        assert_eq!(
            table.keys(),
            vec![
                "Contributo scarso",
                "Contributo limitato",
                "Contributo apprezzabile",
                "Contributo significativo",
                "Impegno, competenza, managerialità",
            ]
        );
        assert!(table.get("Contributo limitato").is_some());
        assert!(table.get("contributo limitato").is_none());
    }

    #[test]
    fn test_patterns_require_leading_whitespace() {
        let re = compile_pattern("test", "spesso").unwrap();
        assert!(re.is_match("molto spesso"));
        assert!(re.is_match("a\tSPESSO"));
        assert!(!re.is_match("spesso"));
        assert_eq!(re.find("e spesso").unwrap().as_str(), " spesso");
    }

    #[test]
    fn test_patterns_are_case_insensitive_on_accents() {
        let table = CategoryTable::builtin();
        let cat = table.get("Contributo apprezzabile").unwrap();
        assert!(cat.patterns().iter().any(|p| p.is_match(" PER LO PIÙ")));
        assert!(cat.patterns().iter().any(|p| p.is_match(" per lo piu'")));
    }

    #[test]
    fn test_stray_bracket_pattern_is_literal() {
        let table = CategoryTable::builtin();
        let cat = table.get("Impegno, competenza, managerialità").unwrap();
        let re = &cat.patterns()[2];
        assert!(!re.is_match(" competenze tecniche"));
        assert!(re.is_match(" competenze] tecniche"));
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let defs = vec![CategoryDef {
            key: "broken".to_string(),
            color: Color::Cyan,
            patterns: vec!["(unclosed".to_string()],
            help: vec!["?".to_string()],
        }];
        match CategoryTable::from_defs(defs) {
            Err(StimaError::InvalidPattern { key, pattern, .. }) => {
                assert_eq!(key, "broken");
                assert_eq!(pattern, "(unclosed");
            }
            other => panic!("expected InvalidPattern, got {:?}", other),
        }
    }

    #[test]
    fn test_help_mismatch_is_reported() {
        let defs = vec![CategoryDef {
            key: "short".to_string(),
            color: Color::Cyan,
            patterns: vec!["a".to_string(), "b".to_string()],
            help: vec!["a".to_string()],
        }];
        assert!(matches!(
            CategoryTable::from_defs(defs),
            Err(StimaError::HelpMismatch {
                patterns: 2,
                help: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_with_config_replaces_in_place_and_appends() {
        let config = TableConfig {
            categories: vec![
                CategoryConfigEntry {
                    key: "Contributo limitato".to_string(),
                    color: "cyan".to_string(),
                    patterns: vec!["insufficient(e|i)".to_string()],
                    help: None,
                },
                CategoryConfigEntry {
                    key: "Eccellenza".to_string(),
                    color: "bright white".to_string(),
                    patterns: vec!["eccellent(e|i)".to_string()],
                    help: Some(vec!["eccellent*".to_string()]),
                },
            ],
        };

        let table = CategoryTable::builtin().with_config(&config).unwrap();
        assert_eq!(table.len(), 6);
        assert_eq!(table.keys()[1], "Contributo limitato");
        assert_eq!(table.keys()[5], "Eccellenza");

        let limitato = table.get("Contributo limitato").unwrap();
        assert_eq!(limitato.color(), Color::Cyan);
        assert_eq!(limitato.patterns().len(), 1);
        assert_eq!(limitato.help(), ["insufficient(e|i)".to_string()]);
    }
}
