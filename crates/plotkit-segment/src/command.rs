//! Normalized path data parsing.
//!
//! Accepts the reduced, absolute command set `M`, `L`, `C` and `Z`. Arcs,
//! shorthand curves, quadratics, `H`/`V` and relative commands must be
//! resolved upstream; any other command letter is rejected.

use plotkit_core::{Point, SegmentError};

/// A single reduced path command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo { ctrl1: Point, ctrl2: Point, to: Point },
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Command(char),
    Number(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Kind {
    Move,
    Line,
    Cubic,
    Close,
}

/// Parses normalized path data into commands.
///
/// Coordinate pairs following `M` continue as implicit `L` commands, and
/// `L`/`C` repeat while numbers keep coming, as in SVG path grammar.
pub fn parse_path_data(data: &str) -> Result<Vec<PathCommand>, SegmentError> {
    let tokens = tokenize(data)?;
    let mut commands = Vec::new();
    let mut current: Option<Kind> = None;
    let mut i = 0;

    while i < tokens.len() {
        let (offset, token) = tokens[i];
        let kind = match token {
            Token::Command(letter) => {
                i += 1;
                match letter {
                    'M' => Kind::Move,
                    'L' => Kind::Line,
                    'C' => Kind::Cubic,
                    'Z' => Kind::Close,
                    other => return Err(SegmentError::UnsupportedCommand { command: other }),
                }
            }
            Token::Number(_) => match current {
                Some(Kind::Move) | Some(Kind::Line) => Kind::Line,
                Some(Kind::Cubic) => Kind::Cubic,
                _ => return Err(malformed(offset, "number without a preceding command")),
            },
        };

        if commands.is_empty() && kind != Kind::Move {
            return Err(malformed(offset, "path data must begin with a moveto"));
        }

        let command = match kind {
            Kind::Move => {
                let [x, y] = take_args(&tokens, &mut i, offset, 'M')?;
                PathCommand::MoveTo(Point::new(x, y))
            }
            Kind::Line => {
                let [x, y] = take_args(&tokens, &mut i, offset, 'L')?;
                PathCommand::LineTo(Point::new(x, y))
            }
            Kind::Cubic => {
                let [x1, y1, x2, y2, x, y] = take_args(&tokens, &mut i, offset, 'C')?;
                PathCommand::CubicTo {
                    ctrl1: Point::new(x1, y1),
                    ctrl2: Point::new(x2, y2),
                    to: Point::new(x, y),
                }
            }
            Kind::Close => PathCommand::Close,
        };

        commands.push(command);
        current = Some(kind);
    }

    Ok(commands)
}

fn take_args<const N: usize>(
    tokens: &[(usize, Token)],
    i: &mut usize,
    command_offset: usize,
    letter: char,
) -> Result<[f64; N], SegmentError> {
    let mut args = [0.0; N];
    for slot in args.iter_mut() {
        match tokens.get(*i) {
            Some((_, Token::Number(value))) => {
                *slot = *value;
                *i += 1;
            }
            Some((offset, Token::Command(_))) => {
                return Err(malformed(
                    *offset,
                    format!("'{}' expects {} arguments", letter, N),
                ));
            }
            None => {
                return Err(malformed(
                    command_offset,
                    format!("'{}' expects {} arguments, data ended", letter, N),
                ));
            }
        }
    }
    Ok(args)
}

fn tokenize(data: &str) -> Result<Vec<(usize, Token)>, SegmentError> {
    let bytes = data.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b' ' | b'\t' | b'\n' | b'\r' | b',' | 0x0C => i += 1,
            b'+' | b'-' | b'.' | b'0'..=b'9' => {
                let (value, next) = scan_number(data, i)?;
                tokens.push((i, Token::Number(value)));
                i = next;
            }
            c if c.is_ascii_alphabetic() => {
                tokens.push((i, Token::Command(c as char)));
                i += 1;
            }
            _ => {
                let ch = data[i..].chars().next().unwrap_or('?');
                return Err(malformed(i, format!("unexpected character '{}'", ch)));
            }
        }
    }

    Ok(tokens)
}

/// Scans one number starting at `start`, returning it and the next offset.
///
/// A second decimal point or a sign starts a new number, so `0.5.5` and
/// `1-2` each yield two values.
fn scan_number(data: &str, start: usize) -> Result<(f64, usize), SegmentError> {
    let bytes = data.as_bytes();
    let len = bytes.len();
    let mut i = start;

    if bytes[i] == b'+' || bytes[i] == b'-' {
        i += 1;
    }

    let int_start = i;
    while i < len && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < len && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < len && bytes[i].is_ascii_digit() {
            i += 1;
        }
        digits += i - frac_start;
    }

    if digits == 0 {
        return Err(malformed(start, "expected a number"));
    }

    // Exponent only if digits follow; otherwise 'e' is left as a command token.
    if i < len && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < len && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    let text = &data[start..i];
    let value: f64 = text
        .parse()
        .map_err(|_| malformed(start, format!("invalid number '{}'", text)))?;
    if !value.is_finite() {
        return Err(malformed(start, format!("number out of range '{}'", text)));
    }

    Ok((value, i))
}

fn malformed(offset: usize, reason: impl Into<String>) -> SegmentError {
    SegmentError::MalformedPathData {
        offset,
        reason: reason.into(),
    }
}
