use crate::command::types::Params;

pub struct ParamsFactory {
    inner: Params,
}

impl ParamsFactory {
    pub fn new() -> Self {
        Self {
            inner: Params::new(),
        }
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.inner.insert(key, value);
        self
    }

    pub fn with_viz(self, viz_type: &str) -> Self {
        self.with("viz_type", viz_type)
    }

    pub fn with_group_by(mut self, columns: &[&str]) -> Self {
        for column in columns {
            self.inner.insert("groupby", *column);
        }
        self
    }

    pub fn with_granularity(self, granularity: &str) -> Self {
        self.with("granularity", granularity)
    }

    pub fn with_since(self, since: &str) -> Self {
        self.with("since", since)
    }

    pub fn with_limit(self, limit: &str) -> Self {
        self.with("limit", limit)
    }

    /// Adds `flt_col_i`, `flt_op_i` and `flt_eq_i` at `index`.
    pub fn with_filter(self, index: usize, column: &str, op: &str, value: &str) -> Self {
        self.with(&format!("flt_col_{index}"), column)
            .with(&format!("flt_op_{index}"), op)
            .with(&format!("flt_eq_{index}"), value)
    }

    pub fn create(self) -> Params {
        self.inner
    }
}
