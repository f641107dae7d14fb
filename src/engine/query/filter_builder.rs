use crate::command::types::{FilterOp, Params};
use crate::engine::errors::VizError;
use crate::engine::query::filter::Filter;
use tracing::debug;

/// One `(flt_col_i, flt_op_i, flt_eq_i)` triple read from the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterTriple<'a> {
    pub index: usize,
    pub column: &'a str,
    pub op: &'a str,
    pub value: &'a str,
}

/// Builds the filter tree from indexed request parameters.
pub struct FilterBuilder;

impl FilterBuilder {
    /// Reads triples at indices 1, 2, 3, … and stops at the first index where
    /// any of the three parts is missing or empty. Later indices are ignored
    /// even when complete.
    pub fn read_chain(params: &Params) -> Vec<FilterTriple<'_>> {
        let mut chain = Vec::new();
        for index in 1.. {
            let column = params.get_non_empty(&format!("flt_col_{index}"));
            let op = params.get_non_empty(&format!("flt_op_{index}"));
            let value = params.get_non_empty(&format!("flt_eq_{index}"));
            let (Some(column), Some(op), Some(value)) = (column, op, value) else {
                break;
            };
            chain.push(FilterTriple {
                index,
                column,
                op,
                value,
            });
        }
        chain
    }

    /// All complete triples conjoined with AND, or `None` when there are none.
    pub fn build(params: &Params) -> Result<Option<Filter>, VizError> {
        let clauses = Self::read_chain(params)
            .iter()
            .map(Self::clause)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            target: "panoramix::filter",
            clauses = clauses.len(),
            "Built filter chain"
        );

        Ok(Filter::all(clauses))
    }

    fn clause(triple: &FilterTriple<'_>) -> Result<Filter, VizError> {
        let op = FilterOp::from_token(triple.op).ok_or_else(|| {
            VizError::InvalidQuerySpec(format!(
                "unsupported filter operator '{}' at position {}",
                triple.op, triple.index
            ))
        })?;

        Ok(match op {
            FilterOp::Eq => Filter::equals(triple.column, triple.value),
            FilterOp::Neq => Filter::not_equals(triple.column, triple.value),
            FilterOp::In => Filter::is_in(triple.column, triple.value.split(',').map(str::trim)),
        })
    }
}
