/*
    =====================  components/parse_value/src/range.rs  =====================
    Range literals, `start..end` or `start..step..end`.

    The shell may split a literal anywhere around its separators, so
    `0..1`, `0 ..1`, `0.. 1`, `0 .. 1` and even `0 1` all mean the same
    range. Each token is split into numbers and separators, and the pieces
    are folded across tokens until three numbers are held with no separator
    left waiting for its right-hand side.
    ---------------------------------------------------------------------------
*/

use crate::{ValueError, is_integer_literal};
use domain::{DomainType, RangeValue};
use token_cursor::TokenCursor;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Fragment<'a> {
    Number(&'a str),
    Separator,
}

pub fn fragments(token: &str) -> impl Iterator<Item = Fragment<'_>> {
    token.split("..").enumerate().flat_map(|(i, piece)| {
        let separator = (i > 0).then_some(Fragment::Separator);
        let number = (!piece.is_empty()).then_some(Fragment::Number(piece));
        separator.into_iter().chain(number)
    })
}

pub fn parse_range(cursor: &mut TokenCursor) -> Result<RangeValue, ValueError> {
    if cursor.peek_value().is_none() {
        return Err(ValueError::MissingRequiredValue {
            ty: DomainType::Range,
        });
    }

    let start = cursor.offset();
    let mut fold = RangeFold::default();

    while let Some(token) = cursor.peek_value() {
        if !fold.accepts(token) {
            break;
        }

        cursor.next();

        if fold.push_token(token).is_none() || fold.is_complete() {
            break;
        }
    }

    fold.finish().ok_or_else(|| ValueError::RangeGrammar {
        tokens: cursor.consumed_since(start).to_vec(),
    })
}

pub fn parse_range_token(token: &str) -> Result<RangeValue, ValueError> {
    let mut fold = RangeFold::default();

    fold.push_token(token)
        .and_then(|()| fold.finish())
        .ok_or_else(|| ValueError::RangeGrammar {
            tokens: vec![token.into()],
        })
}

#[derive(Debug, Default)]
struct RangeFold {
    components: Vec<i64>,
    pending_separator: bool,
    failed: bool,
}

impl RangeFold {
    // Whether the next token still belongs to this range. With two numbers
    // held, only a token that plainly continues it is taken, so that a
    // following range in an array is not swallowed.
    fn accepts(&self, token: &str) -> bool {
        if self.pending_separator {
            return true;
        }

        match self.components.len() {
            0 | 1 => true,
            2 => token.starts_with("..") || is_integer_literal(token),
            _ => false,
        }
    }

    // A token must contribute at least one fragment, an empty argument is
    // never part of a range.
    fn push_token(&mut self, token: &str) -> Option<()> {
        let mut pieces = 0;

        for fragment in fragments(token) {
            pieces += 1;

            if self.push(fragment).is_none() {
                self.failed = true;
                return None;
            }
        }

        if pieces == 0 {
            self.failed = true;
            return None;
        }

        Some(())
    }

    fn push(&mut self, fragment: Fragment) -> Option<()> {
        match fragment {
            Fragment::Separator => {
                if self.components.is_empty() || self.pending_separator {
                    return None;
                }

                self.pending_separator = true;
            }
            Fragment::Number(text) => {
                if self.components.len() == 3 || !is_integer_literal(text) {
                    return None;
                }

                self.components.push(text.parse().ok()?);
                self.pending_separator = false;
            }
        }

        Some(())
    }

    fn is_complete(&self) -> bool {
        self.components.len() == 3 && !self.pending_separator
    }

    fn finish(self) -> Option<RangeValue> {
        if self.failed || self.pending_separator {
            return None;
        }

        match self.components[..] {
            [start, end] => Some(RangeValue::with_unit_step(start, end)),
            [start, step, end] => Some(RangeValue::new(start, step, end)),
            _ => None,
        }
    }
}
