use std::cmp::Ordering;

use super::RoutePattern;

/// Orders patterns from most to least specific: more literal segments first,
/// then fewer parameters. Equal patterns compare `Equal` so a stable sort
/// keeps their original order.
pub fn compare_specificity(a: &RoutePattern, b: &RoutePattern) -> Ordering {
    b.literal_count()
        .cmp(&a.literal_count())
        .then_with(|| a.param_count().cmp(&b.param_count()))
}

pub fn patterns_overlap(a: &RoutePattern, b: &RoutePattern) -> bool {
    use super::RouteToken::Literal;

    a.depth() == b.depth()
        && a.tokens.iter().zip(b.tokens.iter()).all(|pair| match pair {
            (Literal(la), Literal(lb)) => la == lb,
            _ => true,
        })
}
