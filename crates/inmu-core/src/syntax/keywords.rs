//! Fixed keywords, builtins and constants
//!
//! These names are never reported as undeclared, hover shows their static
//! description, and completion offers them.

use serde::{Deserialize, Serialize};

/// Category of a reserved name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordCategory {
    Keyword,
    Builtin,
    Constant,
}

/// A reserved name with its documentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyword {
    pub name: &'static str,
    pub category: KeywordCategory,
    /// One-line summary shown next to completion items
    pub detail: &'static str,
    /// Markdown shown on hover
    pub hover: &'static str,
}

impl Keyword {
    /// Text inserted on completion; builtins take their argument after a space
    #[must_use]
    pub fn insert_text(&self) -> Option<String> {
        match self.category {
            KeywordCategory::Builtin => Some(format!("{} ", self.name)),
            KeywordCategory::Keyword | KeywordCategory::Constant => None,
        }
    }
}

pub const KEYWORDS: &[Keyword] = &[
    Keyword {
        name: "let",
        category: KeywordCategory::Keyword,
        detail: "variable declaration",
        hover: "**Variable declaration**\n\nDeclares a variable and assigns its initial value.\n\n```inmu\nlet x = 42\nlet name = \"INMU\"\n```",
    },
    Keyword {
        name: "if",
        category: KeywordCategory::Keyword,
        detail: "conditional",
        hover: "**Conditional**\n\nRuns the block when the condition is true. Use a `{ ... }` block or close the body with `endif`.\n\n```inmu\nif x > 0 {\n  print \"positive\"\n}\n```",
    },
    Keyword {
        name: "else",
        category: KeywordCategory::Keyword,
        detail: "else branch",
        hover: "**Else branch**\n\nRuns when the condition of the preceding `if` is false.\n\n```inmu\nif x > 0 {\n  print \"positive\"\n} else {\n  print \"not positive\"\n}\n```",
    },
    Keyword {
        name: "elsif",
        category: KeywordCategory::Keyword,
        detail: "chained conditional",
        hover: "**Chained conditional**\n\nTests another condition when the preceding `if` did not match.",
    },
    Keyword {
        name: "endif",
        category: KeywordCategory::Keyword,
        detail: "end of conditional",
        hover: "**End of conditional**\n\nCloses an `if` body written without braces.",
    },
    Keyword {
        name: "while",
        category: KeywordCategory::Keyword,
        detail: "while loop",
        hover: "**While loop**\n\nRepeats the block while the condition holds.\n\n```inmu\nwhile i < 10 {\n  print i\n  i = i + 1\n}\n```",
    },
    Keyword {
        name: "endwhile",
        category: KeywordCategory::Keyword,
        detail: "end of while loop",
        hover: "**End of while loop**\n\nCloses a `while` body written without braces.",
    },
    Keyword {
        name: "for",
        category: KeywordCategory::Keyword,
        detail: "for loop",
        hover: "**For loop**\n\nRepeats the block a given number of times.",
    },
    Keyword {
        name: "fn",
        category: KeywordCategory::Keyword,
        detail: "function definition",
        hover: "**Function definition**\n\nDefines a new function.\n\n```inmu\nfn add(x, y) {\n  return x + y\n}\n```",
    },
    Keyword {
        name: "return",
        category: KeywordCategory::Keyword,
        detail: "return value",
        hover: "**Return**\n\nReturns a value from the current function.\n\n```inmu\nfn get_value() {\n  return 42\n}\n```",
    },
    Keyword {
        name: "print",
        category: KeywordCategory::Builtin,
        detail: "print a value",
        hover: "**print**\n\nWrites a value to standard output.\n\n```inmu\nprint \"Hello, World!\"\nprint x + y\n```\n\n**Arguments:**\n- any value (string, number, expression)",
    },
    Keyword {
        name: "assert",
        category: KeywordCategory::Builtin,
        detail: "assert equality",
        hover: "**assert**\n\nChecks that two values are equal and reports an error otherwise.\n\n```inmu\nassert x == 10\n```\n\n**Arguments:**\n- a comparison using `==`",
    },
    Keyword {
        name: "assert_ne",
        category: KeywordCategory::Builtin,
        detail: "assert inequality",
        hover: "**assert_ne**\n\nChecks that two values differ and reports an error when they are equal.\n\n```inmu\nassert_ne x != 0\n```\n\n**Arguments:**\n- a comparison using `!=`",
    },
    Keyword {
        name: "debug",
        category: KeywordCategory::Builtin,
        detail: "debug output",
        hover: "**debug**\n\nPrints debugging information while troubleshooting.\n\n```inmu\ndebug x\ndebug \"checkpoint reached\"\n```\n\n**Arguments:**\n- any value",
    },
    Keyword {
        name: "trace",
        category: KeywordCategory::Builtin,
        detail: "trace output",
        hover: "**trace**\n\nPrints trace information to follow the execution flow.\n\n```inmu\ntrace \"entering function\"\n```\n\n**Arguments:**\n- any value",
    },
    Keyword {
        name: "true",
        category: KeywordCategory::Constant,
        detail: "boolean true",
        hover: "**true**\n\nThe boolean value true.",
    },
    Keyword {
        name: "false",
        category: KeywordCategory::Constant,
        detail: "boolean false",
        hover: "**false**\n\nThe boolean value false.",
    },
];

/// Look up a reserved name
#[must_use]
pub fn lookup(name: &str) -> Option<&'static Keyword> {
    KEYWORDS.iter().find(|keyword| keyword.name == name)
}

/// Whether `name` is a keyword, builtin or constant
#[must_use]
pub fn is_reserved(name: &str) -> bool {
    lookup(name).is_some()
}
