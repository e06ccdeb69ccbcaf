//! Builtin Category Definitions
//!
//! The authored table of appraisal vocabulary. Categories are listed from the
//! weakest to the strongest judgement; the order is also the rewrite order.

use colored::Color;

/// Builtin category table, in rewrite order.
///
/// Pattern bodies are compiled case-insensitively behind a single leading
/// whitespace character (see [`compile_pattern`](super::table::compile_pattern)).
pub const BUILTIN_CATEGORIES: &[BuiltinCategory] = &[
    BuiltinCategory {
        key: "Contributo scarso",
        color: Color::Magenta,
        patterns: &[
            "ridott(a|e|o|i)",
            "scars(a|e|o|i)",
            "non apprezzabil(e|i)",
            "rar(a|e|o|i)",
        ],
        help: &["ridott*", "scars*", "non apprezzabil*", "rar*"],
    },
    BuiltinCategory {
        key: "Contributo limitato",
        color: Color::Red,
        patterns: &[
            "limitat(o|a|i|e)",
            "moderat(o|a|i|e)",
            "parzial(e|i)",
            "liev(e|i)",
            "poc(o|a|hi|he)",
            "contenut(o|a|i|e)",
            "non consistent(i|e)",
        ],
        help: &[
            "limitat*",
            "moderat*",
            "parzial*",
            "liev*",
            "poc*",
            "contenut*",
            "non consistent*",
        ],
    },
    BuiltinCategory {
        key: "Contributo apprezzabile",
        color: Color::Yellow,
        patterns: &[
            "discret(o|a|i|e)",
            "apprezzabil(e|i)",
            "maggior parte",
            "per lo pi(ù|u')",
            "consistent(e|i)",
            "buon(o|a|i|e)",
            "spesso",
            "attent(o|a|i|e)",
        ],
        help: &[
            "discret*",
            "apprezzabil*",
            "maggior parte",
            "per lo più",
            "consistent*",
            "buon*",
            "spesso",
            "attent*",
        ],
    },
    BuiltinCategory {
        key: "Contributo significativo",
        color: Color::Green,
        patterns: &[
            "significativ(o|a|i|e)",
            "notevol(e|i)",
            "considerevol(e|i)",
            "fort(e|i)",
            "elevat(o|a|i|e)",
            "rilevant(e|i)",
            "ottim(o|a|i|e)",
            "fondamental(e|i)",
            "determinant(e|i)",
            "apprezzabil(e|i)",
        ],
        help: &[
            "significativ*",
            "notevol*",
            "considerevol*",
            "fort*",
            "elevat*",
            "rilevant*",
            "ottim*",
            "fondamental*",
            "determinant*",
            "apprezzabil*",
        ],
    },
    BuiltinCategory {
        key: "Impegno, competenza, managerialità",
        color: Color::Blue,
        patterns: &[
            "dot[e|i] managerial(e|i)",
            "capacit[à|a'] organizzativ(a|e)",
            // Requires a literal ']' after "competenz?"; kept as authored.
            r"competenz(a|e)\] tecnic[a|he]",
        ],
        help: &[
            "dot? managerial*",
            "capacità organizzativ*",
            "competenz?] tecnic?",
        ],
    },
];

/// Static definition of a builtin category.
#[derive(Debug, Clone)]
pub struct BuiltinCategory {
    /// Display label, unique within the table
    pub key: &'static str,
    /// Foreground color used to paint matches and the label
    pub color: Color,
    /// Regex bodies, without the case/whitespace prefix
    pub patterns: &'static [&'static str],
    /// Glob-like descriptors, parallel to `patterns`
    pub help: &'static [&'static str],
}

/// Runtime category definition, before compilation.
///
/// Built from the builtin table or from a table config file.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDef {
    pub key: String,
    pub color: Color,
    pub patterns: Vec<String>,
    pub help: Vec<String>,
}

impl From<&BuiltinCategory> for CategoryDef {
    fn from(builtin: &BuiltinCategory) -> Self {
        Self {
            key: builtin.key.to_string(),
            color: builtin.color,
            patterns: builtin.patterns.iter().map(|s| s.to_string()).collect(),
            help: builtin.help.iter().map(|s| s.to_string()).collect(),
        }
    }
}
