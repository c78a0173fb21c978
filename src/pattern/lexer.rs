use super::detect::is_bracket_segment;
use super::{PatternError, PatternResult, RoutePattern, RouteToken};

#[tracing::instrument(level = "trace", skip_all, fields(route = %route))]
pub fn parse_route(route: &str) -> PatternResult<RoutePattern> {
    parse_with(route, parse_bracket_segment)
}

#[tracing::instrument(level = "trace", skip_all, fields(path = %path))]
pub fn parse_positional(path: &str) -> PatternResult<RoutePattern> {
    parse_with(path, parse_colon_segment)
}

pub fn to_positional_path(route: &str) -> PatternResult<String> {
    parse_route(route).map(|pattern| pattern.positional_path())
}

fn parse_with(
    route: &str,
    parse_segment: fn(&str) -> PatternResult<RouteToken>,
) -> PatternResult<RoutePattern> {
    let Some(rest) = route.strip_prefix('/') else {
        return Err(PatternError::MissingLeadingSlash {
            route: route.to_string(),
        });
    };

    let mut tokens = Vec::new();
    if rest.is_empty() {
        return Ok(RoutePattern::new(tokens));
    }

    // One trailing slash is tolerated; any other empty segment would change depth.
    let body = rest.strip_suffix('/').unwrap_or(rest);
    for seg in body.split('/') {
        if seg.is_empty() {
            return Err(PatternError::EmptySegment {
                route: route.to_string(),
            });
        }
        let token = parse_segment(seg)?;
        if let RouteToken::Param { name } = &token
            && tokens
                .iter()
                .any(|t| matches!(t, RouteToken::Param { name: n } if n == name))
        {
            return Err(PatternError::DuplicateParameterName {
                route: route.to_string(),
                name: name.clone(),
            });
        }
        tokens.push(token);
    }

    Ok(RoutePattern::new(tokens))
}

fn parse_bracket_segment(seg: &str) -> PatternResult<RouteToken> {
    if is_bracket_segment(seg) {
        let name = &seg[1..seg.len() - 1];
        if name.contains('[') || name.contains(']') {
            return Err(PatternError::UnbalancedBrackets {
                segment: seg.to_string(),
            });
        }
        validate_param_name(seg, name)?;
        return Ok(RouteToken::Param {
            name: name.to_string(),
        });
    }

    if !brackets_balanced(seg) {
        return Err(PatternError::UnbalancedBrackets {
            segment: seg.to_string(),
        });
    }

    Ok(RouteToken::Literal(seg.to_string()))
}

fn parse_colon_segment(seg: &str) -> PatternResult<RouteToken> {
    if let Some(name) = seg.strip_prefix(':') {
        validate_param_name(seg, name)?;
        return Ok(RouteToken::Param {
            name: name.to_string(),
        });
    }

    if seg.contains(':') {
        return Err(PatternError::MixedParameterLiteralSyntax {
            segment: seg.to_string(),
        });
    }

    Ok(RouteToken::Literal(seg.to_string()))
}

// Brackets embedded in literal text must pair up without nesting.
fn brackets_balanced(seg: &str) -> bool {
    let mut open = false;
    for b in seg.bytes() {
        match b {
            b'[' if open => return false,
            b'[' => open = true,
            b']' if !open => return false,
            b']' => open = false,
            _ => {}
        }
    }
    !open
}

fn validate_param_name(seg: &str, name: &str) -> PatternResult<()> {
    let nb = name.as_bytes();

    if nb.is_empty() {
        return Err(PatternError::ParameterMissingName {
            segment: seg.to_string(),
        });
    }

    if !(nb[0].is_ascii_alphabetic() || nb[0] == b'_') {
        return Err(PatternError::ParameterInvalidStart {
            segment: seg.to_string(),
            name: name.to_string(),
            found: name.chars().next().unwrap_or_default(),
        });
    }

    if let Some(invalid) = name
        .chars()
        .skip(1)
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
    {
        return Err(PatternError::ParameterInvalidCharacter {
            segment: seg.to_string(),
            name: name.to_string(),
            invalid,
        });
    }

    Ok(())
}
