/// Splits a command on spaces, keeping bracketed, braced, parenthesized and
/// quoted spans together.
///
/// A quote closes only on the same quote character when it is not preceded
/// by a backslash. Unbalanced closing brackets are tolerated; once the depth
/// drops below zero no further splitting happens.
pub fn tokenize(command: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut depth: i32 = 0;
    let mut quote: Option<char> = None;
    let mut previous: Option<char> = None;

    for c in command.chars() {
        if let Some(q) = quote {
            current.push(c);
            if c == q && previous != Some('\\') {
                quote = None;
            }
            previous = Some(c);
            continue;
        }

        match c {
            '"' | '\'' => {
                quote = Some(c);
                current.push(c);
            }
            '[' | '{' | '(' => {
                depth += 1;
                current.push(c);
            }
            ']' | '}' | ')' => {
                depth -= 1;
                current.push(c);
            }
            ' ' if depth == 0 => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(c),
        }
        previous = Some(c);
    }

    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

