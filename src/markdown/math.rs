//! LaTeX math to terminal text
//!
//! Terminals cannot typeset math, so common LaTeX commands are replaced with
//! their Unicode symbols, `\frac{a}{b}` becomes `a/b`, and simple super- and
//! subscripts use the Unicode script characters. Anything unknown is left as
//! written.

const SYMBOLS: &[(&str, &str)] = &[
    ("times", "×"),
    ("cdot", "·"),
    ("div", "÷"),
    ("pm", "±"),
    ("mp", "∓"),
    ("leq", "≤"),
    ("le", "≤"),
    ("geq", "≥"),
    ("ge", "≥"),
    ("neq", "≠"),
    ("ne", "≠"),
    ("approx", "≈"),
    ("equiv", "≡"),
    ("sim", "∼"),
    ("propto", "∝"),
    ("infty", "∞"),
    ("pi", "π"),
    ("alpha", "α"),
    ("beta", "β"),
    ("gamma", "γ"),
    ("Gamma", "Γ"),
    ("delta", "δ"),
    ("Delta", "Δ"),
    ("epsilon", "ε"),
    ("varepsilon", "ε"),
    ("theta", "θ"),
    ("lambda", "λ"),
    ("mu", "μ"),
    ("rho", "ρ"),
    ("sigma", "σ"),
    ("Sigma", "Σ"),
    ("tau", "τ"),
    ("phi", "φ"),
    ("varphi", "φ"),
    ("omega", "ω"),
    ("Omega", "Ω"),
    ("sum", "∑"),
    ("prod", "∏"),
    ("int", "∫"),
    ("oint", "∮"),
    ("partial", "∂"),
    ("nabla", "∇"),
    ("to", "→"),
    ("rightarrow", "→"),
    ("leftarrow", "←"),
    ("Rightarrow", "⇒"),
    ("Leftarrow", "⇐"),
    ("Leftrightarrow", "⇔"),
    ("iff", "⇔"),
    ("implies", "⇒"),
    ("in", "∈"),
    ("notin", "∉"),
    ("subset", "⊂"),
    ("subseteq", "⊆"),
    ("cup", "∪"),
    ("cap", "∩"),
    ("emptyset", "∅"),
    ("forall", "∀"),
    ("exists", "∃"),
    ("angle", "∠"),
    ("triangle", "△"),
    ("perp", "⊥"),
    ("parallel", "∥"),
    ("circ", "∘"),
    ("degree", "°"),
    ("cdots", "⋯"),
    ("ldots", "…"),
    ("dots", "…"),
    ("therefore", "∴"),
    ("because", "∵"),
    ("quad", "  "),
    ("qquad", "    "),
    ("sin", "sin"),
    ("cos", "cos"),
    ("tan", "tan"),
    ("cot", "cot"),
    ("log", "log"),
    ("ln", "ln"),
    ("lim", "lim"),
    ("max", "max"),
    ("min", "min"),
    ("exp", "exp"),
];

/// Commands whose argument is shown as plain text
const TEXT_COMMANDS: &[&str] = &[
    "text",
    "mathrm",
    "mathbf",
    "mathit",
    "textbf",
    "operatorname",
    "boxed",
    "overline",
    "vec",
];

/// Convert LaTeX math source into readable Unicode text
pub fn prettify(src: &str) -> String {
    let chars: Vec<char> = src.chars().collect();
    let mut out = String::new();
    render_chars(&chars, &mut out);
    out.trim().to_string()
}

fn render_chars(chars: &[char], out: &mut String) {
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '\\' => {
                i = render_command(chars, i, out);
            }
            '^' | '_' => {
                let (group, next) = read_group(chars, i + 1);
                let mut inner = String::new();
                render_chars(group, &mut inner);
                out.push_str(&script(&inner, chars[i] == '^'));
                i = next;
            }
            '{' | '}' => {
                i += 1;
            }
            '&' => {
                // Alignment marker in aligned environments
                i += 1;
            }
            c => {
                out.push(c);
                i += 1;
            }
        }
    }
}

/// Render the command starting at `chars[start] == '\\'`, return the next index
fn render_command(chars: &[char], start: usize, out: &mut String) -> usize {
    let mut i = start + 1;
    if i >= chars.len() {
        out.push('\\');
        return i;
    }

    // Single-character commands: spacing, escaped braces, line breaks
    if !chars[i].is_ascii_alphabetic() {
        match chars[i] {
            ',' | ';' | ':' | ' ' | '!' => out.push(' '),
            '\\' => out.push(' '),
            '{' => out.push('{'),
            '}' => out.push('}'),
            '%' => out.push('%'),
            '$' => out.push('$'),
            c => {
                out.push('\\');
                out.push(c);
            }
        }
        return i + 1;
    }

    let name_start = i;
    while i < chars.len() && chars[i].is_ascii_alphabetic() {
        i += 1;
    }
    let name: String = chars[name_start..i].iter().collect();

    match name.as_str() {
        "frac" | "dfrac" | "tfrac" => {
            let (numerator, next) = read_group(chars, i);
            let (denominator, next) = read_group(chars, next);
            let mut num = String::new();
            let mut den = String::new();
            render_chars(numerator, &mut num);
            render_chars(denominator, &mut den);
            out.push_str(&wrap_operand(&num));
            out.push('/');
            out.push_str(&wrap_operand(&den));
            next
        }
        "sqrt" => {
            let (radicand, next) = read_group(chars, i);
            let mut inner = String::new();
            render_chars(radicand, &mut inner);
            out.push('√');
            out.push_str(&wrap_operand(&inner));
            next
        }
        "left" | "right" | "big" | "Big" | "bigg" | "Bigg" | "displaystyle" => i,
        "begin" | "end" => {
            // Drop environment names such as {aligned}
            let (_, next) = read_group(chars, i);
            next
        }
        name if TEXT_COMMANDS.contains(&name) => {
            let (group, next) = read_group(chars, i);
            render_chars(group, out);
            next
        }
        name => {
            match SYMBOLS.iter().find(|(command, _)| *command == name) {
                Some((_, symbol)) => out.push_str(symbol),
                None => {
                    out.push('\\');
                    out.push_str(name);
                }
            }
            i
        }
    }
}

/// Read a `{...}` group, a `\command`, or a single character at `start`
///
/// Returns the group contents (without braces) and the index after it.
fn read_group(chars: &[char], start: usize) -> (&[char], usize) {
    let mut i = start;
    while i < chars.len() && chars[i] == ' ' {
        i += 1;
    }
    if i >= chars.len() {
        return (&[], i);
    }

    match chars[i] {
        '{' => {
            let mut depth = 0usize;
            for (offset, &c) in chars[i..].iter().enumerate() {
                match c {
                    '{' => depth += 1,
                    '}' => {
                        depth -= 1;
                        if depth == 0 {
                            let end = i + offset;
                            return (&chars[i + 1..end], end + 1);
                        }
                    }
                    _ => {}
                }
            }
            // Unbalanced: take the rest
            (&chars[i + 1..], chars.len())
        }
        '\\' => {
            let mut end = i + 1;
            while end < chars.len() && chars[end].is_ascii_alphabetic() {
                end += 1;
            }
            if end == i + 1 && end < chars.len() {
                end += 1;
            }
            (&chars[i..end], end)
        }
        _ => (&chars[i..i + 1], i + 1),
    }
}

fn wrap_operand(text: &str) -> String {
    if text.chars().count() <= 1 || text.chars().all(|c| c.is_alphanumeric() || c == '.') {
        text.to_string()
    } else {
        format!("({})", text)
    }
}

fn script(text: &str, superscript: bool) -> String {
    let mapped: Option<String> = text
        .chars()
        .map(|c| {
            if superscript {
                superscript_char(c)
            } else {
                subscript_char(c)
            }
        })
        .collect();

    match mapped {
        Some(s) if !s.is_empty() => s,
        _ if superscript => format!("^{}", wrap_operand(text)),
        _ => format!("_{}", wrap_operand(text)),
    }
}

fn superscript_char(c: char) -> Option<char> {
    Some(match c {
        '0' => '⁰',
        '1' => '¹',
        '2' => '²',
        '3' => '³',
        '4' => '⁴',
        '5' => '⁵',
        '6' => '⁶',
        '7' => '⁷',
        '8' => '⁸',
        '9' => '⁹',
        '+' => '⁺',
        '-' => '⁻',
        '=' => '⁼',
        '(' => '⁽',
        ')' => '⁾',
        'n' => 'ⁿ',
        'i' => 'ⁱ',
        _ => return None,
    })
}

fn subscript_char(c: char) -> Option<char> {
    Some(match c {
        '0' => '₀',
        '1' => '₁',
        '2' => '₂',
        '3' => '₃',
        '4' => '₄',
        '5' => '₅',
        '6' => '₆',
        '7' => '₇',
        '8' => '₈',
        '9' => '₉',
        '+' => '₊',
        '-' => '₋',
        '=' => '₌',
        '(' => '₍',
        ')' => '₎',
        'a' => 'ₐ',
        'e' => 'ₑ',
        'o' => 'ₒ',
        'x' => 'ₓ',
        'i' => 'ᵢ',
        'j' => 'ⱼ',
        'k' => 'ₖ',
        'm' => 'ₘ',
        'n' => 'ₙ',
        _ => return None,
    })
}
