//! Text format for augmented matrices
//!
//! One equation per line, entries separated by whitespace or commas, the
//! last entry being the right-hand side. Entries are integers or `n/d`
//! fractions. Blank lines and `#` comments are ignored.

use anyhow::{bail, Context, Result};
use exact_rref_core::{Matrix, Rational};

fn parse_rows<T>(text: &str, parse: impl Fn(&str) -> Result<T>) -> Result<Vec<Vec<T>>> {
    let mut rows = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let line = line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        let row = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(&parse)
            .collect::<Result<Vec<T>>>()
            .with_context(|| format!("line {}", line_no + 1))?;
        rows.push(row);
    }
    if rows.is_empty() {
        bail!("input contains no equations");
    }
    Ok(rows)
}

pub fn parse_rational_matrix(text: &str) -> Result<Matrix<Rational>> {
    let rows = parse_rows(text, |token| {
        token
            .parse::<Rational>()
            .with_context(|| format!("invalid entry {token:?}"))
    })?;
    Ok(Matrix::from_rows(rows)?)
}

pub fn parse_integer_matrix(text: &str) -> Result<Matrix<i64>> {
    let rows = parse_rows(text, |token| {
        token
            .parse::<i64>()
            .with_context(|| format!("invalid integer entry {token:?}"))
    })?;
    Ok(Matrix::from_rows(rows)?)
}
