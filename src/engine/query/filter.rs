use serde::{Deserialize, Serialize};

/// Filter expression tree, serialized in the store's filter dialect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Filter {
    Selector { dimension: String, value: String },
    Not { field: Box<Filter> },
    Or { fields: Vec<Filter> },
    And { fields: Vec<Filter> },
}

impl Filter {
    pub fn equals(dimension: impl Into<String>, value: impl Into<String>) -> Self {
        Filter::Selector {
            dimension: dimension.into(),
            value: value.into(),
        }
    }

    pub fn not_equals(dimension: impl Into<String>, value: impl Into<String>) -> Self {
        Filter::Not {
            field: Box::new(Self::equals(dimension, value)),
        }
    }

    /// OR over one equality per value.
    pub fn is_in<I, S>(dimension: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Filter::Or {
            fields: values
                .into_iter()
                .map(|v| Self::equals(dimension, v))
                .collect(),
        }
    }

    /// Conjoins clauses; a single clause is returned as is.
    pub fn all(mut clauses: Vec<Filter>) -> Option<Self> {
        match clauses.len() {
            0 => None,
            1 => clauses.pop(),
            _ => Some(Filter::And { fields: clauses }),
        }
    }

    /// Every dimension referenced anywhere in the tree, in first-seen order.
    pub fn columns(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_columns(&mut out);
        out
    }

    fn collect_columns<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Filter::Selector { dimension, .. } => {
                if !out.contains(&dimension.as_str()) {
                    out.push(dimension);
                }
            }
            Filter::Not { field } => field.collect_columns(out),
            Filter::Or { fields } | Filter::And { fields } => {
                for f in fields {
                    f.collect_columns(out);
                }
            }
        }
    }
}
