//! Whitespace tokenizer for Thistle source lines, plus the literal
//! classification applied to whole tokens during dispatch.

/// Split one line into tokens. A double quote toggles quoted mode: while
/// quoted, whitespace stays inside the token, and the token (both quote
/// characters included) is emitted at the closing quote. Outside quotes a
/// whitespace run flushes the pending token and is discarded. A quote left
/// unterminated at end of line drops the partial token.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        if ch == '"' {
            current.push(ch);
            if in_quotes {
                tokens.push(std::mem::take(&mut current));
            }
            in_quotes = !in_quotes;
        } else if ch.is_whitespace() && !in_quotes {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        } else {
            current.push(ch);
        }
    }

    if !current.is_empty() && !in_quotes {
        tokens.push(current);
    }

    tokens
}

/// An integer literal is an optional leading sign followed by one or more
/// decimal digits and nothing else.
pub fn is_integer_literal(token: &str) -> bool {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    !digits.is_empty() && digits.chars().all(|ch| ch.is_ascii_digit())
}

/// A float literal is an optional leading sign, exactly one decimal point,
/// at least one digit somewhere, and nothing else.
pub fn is_float_literal(token: &str) -> bool {
    let body = token.strip_prefix(['+', '-']).unwrap_or(token);
    let mut dots = 0;
    let mut digits = 0;
    for ch in body.chars() {
        match ch {
            '.' => dots += 1,
            '0'..='9' => digits += 1,
            _ => return false,
        }
    }
    dots == 1 && digits > 0
}
