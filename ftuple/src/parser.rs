//! Parser for tuple literals using chumsky.
//!
//! Turns text such as `(1, a=3, 2; b=4)` into a [`FrankenTuple`].
//!
//! Two stages:
//! 1) Tokenisation from input string to a `Token` stream.
//! 2) Parsing tokens into items, then partitioning them into the positional and
//!    named parts.
//!
//! Accepted syntax:
//! - The literal is wrapped in parentheses. Items are separated by `,` and a
//!   trailing comma is allowed: `()`, `(1,)`, `(a=1,)`.
//! - An item is either a literal (positional) or `name = literal` (named).
//!   Positional and named items may be intermixed in any order; each part keeps the
//!   relative order of its own items.
//! - A single `;` may section the literal the same way a call does. Every item after
//!   it must be named: `(1, 2; a=3, b=4)`.
//! - Literals:
//!   - integers: `42`, `-7`, `1_000`, with an optional width suffix `i8`..`i64` or
//!     `u8`..`u64` (`255u8`). Plain integers are `i64`.
//!   - hexadecimal integers: `0x1f`. They are unsigned and sized by digit count:
//!     up to 2 digits is `u8`, 4 is `u16`, 8 is `u32`, 16 is `u64`.
//!   - floats: `1.5`, `-2e3`, `1.5e-3`, with an optional `f32`/`f64` suffix. Plain
//!     floats are `f64`.
//!   - `true`, `false`, `nothing`.
//!   - strings: `"text"` with the escapes `\"`, `\\`, `\n` and `\t`.
//!   - symbols: `:name`.
//! - Comments start with `#` and run to the end of the line.
use std::str::FromStr;

use chumsky::{input::ValueInput, prelude::*};
use log::debug;

use crate::{
    named::NamedTuple,
    tuple::FrankenTuple,
    types::primary::IType,
    utils::Error,
    value::{Name, Value},
};

pub type Spanned<T> = (T, SimpleSpan);
type Span = SimpleSpan;

#[derive(Clone, Debug, PartialEq)]
enum Token {
    // Delimiters & punctuation
    LParen,
    RParen,
    Comma,
    Semicolon,
    Equal,

    // Literals and names
    Literal(Value),
    Ident(Name),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Comma => write!(f, ","),
            Token::Semicolon => write!(f, ";"),
            Token::Equal => write!(f, "="),
            Token::Literal(v) => write!(f, "{v}"),
            Token::Ident(n) => write!(f, "{n}"),
        }
    }
}

// ---------------- Lexer ----------------

fn numeric_literal(text: &str, suffix: Option<&str>) -> Result<Value, String> {
    let digits = text.replace('_', "");
    let is_float = digits.contains(['.', 'e', 'E']);

    fn parse<T: FromStr>(digits: &str, suffix: &str) -> Result<T, String> {
        digits
            .parse::<T>()
            .map_err(|_| format!("literal `{digits}` does not fit in `{suffix}`"))
    }

    let value = match suffix {
        None if is_float => Value::F64(parse(&digits, "f64")?),
        None => Value::I64(parse(&digits, "i64")?),
        Some("f32") => Value::F32(parse(&digits, "f32")?),
        Some("f64") => Value::F64(parse(&digits, "f64")?),
        Some(suffix) if is_float => {
            return Err(format!(
                "integer suffix `{suffix}` cannot be applied to the float literal `{text}`"
            ));
        }
        Some("i8") => Value::I8(parse(&digits, "i8")?),
        Some("i16") => Value::I16(parse(&digits, "i16")?),
        Some("i32") => Value::I32(parse(&digits, "i32")?),
        Some("i64") => Value::I64(parse(&digits, "i64")?),
        Some("u8") => Value::U8(parse(&digits, "u8")?),
        Some("u16") => Value::U16(parse(&digits, "u16")?),
        Some("u32") => Value::U32(parse(&digits, "u32")?),
        Some("u64") => Value::U64(parse(&digits, "u64")?),
        Some(suffix) => return Err(format!("unknown literal suffix `{suffix}`")),
    };

    // Float parsing saturates to infinity instead of failing
    match value {
        Value::F32(v) if !v.is_finite() => {
            Err(format!("literal `{digits}` does not fit in `f32`"))
        }
        Value::F64(v) if !v.is_finite() => {
            Err(format!("literal `{digits}` does not fit in `f64`"))
        }
        _ => Ok(value),
    }
}

fn hex_literal(digits: &str) -> Result<Value, String> {
    let too_long = || format!("hexadecimal literal `0x{digits}` has more than 16 digits");
    let ty = IType::unsigned_for_hex_digits(digits.len()).ok_or_else(too_long)?;
    let raw = u64::from_str_radix(digits, 16).map_err(|_| too_long())?;

    // The digit count bounds the value, so the narrowing casts are lossless.
    let value = match ty {
        IType::U8 => Value::U8(raw as u8),
        IType::U16 => Value::U16(raw as u16),
        IType::U32 => Value::U32(raw as u32),
        _ => Value::U64(raw),
    };
    Ok(value)
}

fn lexer<'a>() -> impl Parser<'a, &'a str, Vec<Spanned<Token>>, extra::Err<Rich<'a, char>>> {
    let ident = any()
        .filter(|c: &char| c.is_ascii_alphabetic() || *c == '_')
        .then(
            any()
                .filter(|c: &char| c.is_ascii_alphanumeric() || *c == '_')
                .repeated(),
        )
        .to_slice();

    // Keywords, otherwise names
    let word = ident.clone().map(|s: &str| match s {
        "true" => Token::Literal(Value::Bool(true)),
        "false" => Token::Literal(Value::Bool(false)),
        "nothing" => Token::Literal(Value::Nothing),
        _ => Token::Ident(Name::from(s)),
    });

    let symbol = just(':')
        .ignore_then(ident)
        .map(|s: &str| Token::Literal(Value::Sym(Name::from(s))))
        .labelled("symbol");

    let escape = just('\\').ignore_then(choice((
        just('"').to('"'),
        just('\\').to('\\'),
        just('n').to('\n'),
        just('t').to('\t'),
    )));
    let string = just('"')
        .ignore_then(none_of("\\\"").or(escape).repeated().collect::<String>())
        .then_ignore(just('"'))
        .map(|s| Token::Literal(Value::Str(s)))
        .labelled("string");

    let hex = just("0x")
        .ignore_then(
            any()
                .filter(char::is_ascii_hexdigit)
                .repeated()
                .at_least(1)
                .to_slice(),
        )
        .try_map(|digits: &str, span| {
            hex_literal(digits)
                .map(Token::Literal)
                .map_err(|msg| Rich::custom(span, msg))
        })
        .labelled("hexadecimal number");

    let dec_digits = any().filter(char::is_ascii_digit).then(
        any()
            .filter(|c: &char| c.is_ascii_digit() || *c == '_')
            .repeated(),
    );
    let fraction = just('.').then(dec_digits.clone());
    let exponent = one_of("eE")
        .then(one_of("+-").or_not())
        .then(dec_digits.clone());
    let suffix = choice((
        just("i8"),
        just("i16"),
        just("i32"),
        just("i64"),
        just("u8"),
        just("u16"),
        just("u32"),
        just("u64"),
        just("f32"),
        just("f64"),
    ));
    let number = one_of("+-")
        .or_not()
        .then(dec_digits)
        .then(fraction.or_not())
        .then(exponent.or_not())
        .to_slice()
        .then(suffix.or_not())
        .try_map(|(text, suffix): (&str, Option<&str>), span| {
            numeric_literal(text, suffix)
                .map(Token::Literal)
                .map_err(|msg| Rich::custom(span, msg))
        })
        .labelled("number");

    let punct = choice((
        just('(').to(Token::LParen),
        just(')').to(Token::RParen),
        just(',').to(Token::Comma),
        just(';').to(Token::Semicolon),
        just('=').to(Token::Equal),
    ));

    // Hexadecimal before decimal so that `0x..` is not split after the `0`
    let token = choice((string, symbol, hex, number, word, punct));

    // Comments are single-line starting with '#'
    let comment = just('#')
        .then(any().and_is(just('\n').not()).repeated())
        .padded()
        .to(());

    token
        .map_with(|tok, e| (tok, e.span()))
        .padded_by(comment.repeated())
        .padded()
        .repeated()
        .collect()
        .then_ignore(end())
}

// ---------------- chumsky parser over tokens ----------------

#[derive(Debug, Clone)]
enum Item {
    Positional(Value),
    Named(Name, Value),
}

type Sections = (Vec<Item>, Option<Vec<(Name, Value)>>);

fn tuple_parser<'tokens, I>()
-> impl Parser<'tokens, I, Sections, extra::Err<Rich<'tokens, Token, Span>>> + Clone
where
    I: ValueInput<'tokens, Token = Token, Span = Span>,
{
    let value = select! { Token::Literal(v) => v }.labelled("literal");
    let name = select! { Token::Ident(n) => n }.labelled("name");

    let named_item = name
        .then_ignore(just(Token::Equal))
        .then(value.clone())
        .labelled("named item");

    let item = choice((
        named_item.clone().map(|(n, v)| Item::Named(n, v)),
        value.map(Item::Positional),
    ))
    .labelled("item");

    // Intermixed section: any item, in any order
    let mixed = item
        .separated_by(just(Token::Comma))
        .allow_trailing()
        .collect::<Vec<_>>();

    // After the semicolon: named items only
    let named_section = just(Token::Semicolon).ignore_then(
        named_item
            .separated_by(just(Token::Comma))
            .allow_trailing()
            .collect::<Vec<_>>(),
    );

    mixed
        .then(named_section.or_not())
        .delimited_by(just(Token::LParen), just(Token::RParen))
        .labelled("tuple literal")
}

fn assemble((items, section): Sections) -> Result<FrankenTuple, Error> {
    let mut positional = Vec::new();
    let mut named = NamedTuple::default();

    for item in items {
        match item {
            Item::Positional(value) => positional.push(value),
            Item::Named(name, value) => named.push(name, value)?,
        }
    }
    for (name, value) in section.into_iter().flatten() {
        named.push(name, value)?;
    }

    Ok(FrankenTuple::new(positional, named))
}

// ---------------- Public API ----------------

/// Parse a tuple literal into a [`FrankenTuple`].
///
/// Returns [`Error::Syntax`] with human-readable diagnostics if the text is not a
/// valid literal, or [`Error::DuplicateName`] if a name is given twice.
///
/// Example
/// ```
/// use ftuple::parser::parse;
/// let sectioned = parse("(1, 2; a=3, b=4)").unwrap();
/// let intermixed = parse("(1, a=3, 2, b=4)").unwrap();
/// assert_eq!(sectioned, intermixed);
/// assert_eq!(sectioned.to_string(), "FrankenTuple((1, 2), (a = 3, b = 4))");
/// ```
pub fn parse(src: &str) -> Result<FrankenTuple, Error> {
    // 1) Lexing
    let (tokens, lex_errs) = lexer().parse(src).into_output_errors();
    let mut diagnostics: Vec<String> = lex_errs
        .into_iter()
        .map(|e| format!("lexing error: {e}"))
        .collect();

    let tokens = match tokens {
        Some(toks) if diagnostics.is_empty() => toks,
        _ => return Err(Error::Syntax { diagnostics }),
    };

    // 2) Parsing over the plain token stream; spans of parse errors are token
    // indices and are mapped back to source offsets for reporting.
    let plain: Vec<Token> = tokens.iter().map(|(t, _s)| t.clone()).collect();
    let (sections, parse_errs) = tuple_parser()
        .then_ignore(end())
        .parse(plain.as_slice())
        .into_output_errors();
    diagnostics.extend(parse_errs.into_iter().map(|e| {
        let offset = tokens
            .get(e.span().start)
            .map(|(_, span)| span.start)
            .unwrap_or(src.len());
        format!("parse error at offset {offset}: {e}")
    }));

    let sections = match sections {
        Some(s) if diagnostics.is_empty() => s,
        _ => return Err(Error::Syntax { diagnostics }),
    };

    // 3) Partition into positional and named parts
    let ft = assemble(sections)?;
    debug!("Parsed tuple literal {:?} as {}", src, ft);
    Ok(ft)
}

impl FromStr for FrankenTuple {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
