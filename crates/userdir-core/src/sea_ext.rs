use sea_orm::sea_query::{Alias, Expr, Func, IntoColumnRef, SimpleExpr};

/// `TRIM(LOWER(col))`, the canonical form used for case-insensitive matching
/// of emails and domains.
pub fn trim_lower<C>(col: C) -> Expr
where
    C: IntoColumnRef,
{
    let lowered: SimpleExpr = Func::lower(Expr::col(col)).into();
    Expr::expr(Func::cust(Alias::new("TRIM")).arg(lowered))
}

/// Shorthand for `TRIM(LOWER(col)) = value`. `value` must already be normalized.
pub fn trim_lower_eq<C>(col: C, value: &str) -> SimpleExpr
where
    C: IntoColumnRef,
{
    trim_lower(col).eq(value)
}
