use super::analysis::find_duplicate_name;
use super::ast::{PatternAst, PatternNode, SymbolNode};
use super::error::{PatternError, PatternResult};

/// Parses a path pattern into its tree form.
///
/// Grammar, informally:
///
/// ```text
/// or      := cat ('|' cat)*
/// cat     := term+
/// term    := literal | '/' | '.' | ':' name | '*' name | '(' or ')'
/// literal := one or more characters excluding '/', '.', '(', ')', ':', '*', '|'
/// name    := [A-Za-z_][A-Za-z0-9_]*
/// ```
///
/// A backslash escapes the following metacharacter inside literal text. An
/// empty alternation branch parses to the internal placeholder node; an
/// empty group is an error.
#[tracing::instrument(level = "trace")]
pub fn parse_pattern(pattern: &str) -> PatternResult<PatternAst> {
    if pattern.is_empty() {
        return Err(PatternError::EmptyPattern);
    }

    let mut parser = PatternParser::new(pattern);
    let root = parser.parse_alternation(None, None)?;

    if let Some(name) = find_duplicate_name(&root) {
        return Err(PatternError::DuplicateName {
            pattern: pattern.to_string(),
            name: name.to_string(),
        });
    }

    Ok(PatternAst::new(root))
}

struct PatternParser<'a> {
    pattern: &'a str,
    chars: Vec<(usize, char)>,
    index: usize,
}

impl<'a> PatternParser<'a> {
    fn new(pattern: &'a str) -> Self {
        Self {
            pattern,
            chars: pattern.char_indices().collect(),
            index: 0,
        }
    }

    /// `or := cat ('|' cat)*`, plus terminator bookkeeping for groups. The
    /// terminator (if any) is consumed before returning.
    fn parse_alternation(
        &mut self,
        terminator: Option<char>,
        group_start: Option<usize>,
    ) -> PatternResult<PatternNode> {
        let mut branches = vec![self.parse_sequence(terminator)?];
        while self.peek() == Some('|') {
            self.next();
            branches.push(self.parse_sequence(terminator)?);
        }

        match terminator {
            Some(expected) => {
                if self.peek() == Some(expected) {
                    self.next();
                } else {
                    return Err(PatternError::UnterminatedGroup {
                        pattern: self.pattern.to_string(),
                        start: group_start.unwrap_or(self.pattern.len()),
                    });
                }
            }
            None => {
                if self.peek() == Some(')') {
                    return Err(PatternError::UnexpectedClosingParenthesis {
                        pattern: self.pattern.to_string(),
                        index: self.current_byte_index(),
                    });
                }
            }
        }

        if branches.len() == 1 {
            return Ok(branches.into_iter().next().unwrap_or(PatternNode::Dummy));
        }
        Ok(PatternNode::Or(branches))
    }

    /// `cat := term+`, folded right-to-left so `Cat` nests to the right. An
    /// empty sequence yields the placeholder node for empty branches.
    fn parse_sequence(&mut self, terminator: Option<char>) -> PatternResult<PatternNode> {
        let mut terms = Vec::new();
        while let Some(ch) = self.peek() {
            if ch == '|' || Some(ch) == terminator {
                break;
            }
            match ch {
                ')' => {
                    return Err(PatternError::UnexpectedClosingParenthesis {
                        pattern: self.pattern.to_string(),
                        index: self.current_byte_index(),
                    });
                }
                '/' => {
                    self.next();
                    terms.push(PatternNode::Slash);
                }
                '.' => {
                    self.next();
                    terms.push(PatternNode::Dot);
                }
                ':' => {
                    let symbol = self.parse_name()?;
                    terms.push(PatternNode::Symbol(symbol));
                }
                '*' => {
                    let symbol = self.parse_name()?;
                    terms.push(PatternNode::Star(symbol));
                }
                '(' => {
                    terms.push(self.parse_group()?);
                }
                _ => {
                    terms.push(self.parse_literal()?);
                }
            }
        }

        let mut terms = terms.into_iter().rev();
        let Some(last) = terms.next() else {
            return Ok(PatternNode::Dummy);
        };
        Ok(terms.fold(last, |rest, term| {
            PatternNode::Cat(Box::new(term), Box::new(rest))
        }))
    }

    fn parse_group(&mut self) -> PatternResult<PatternNode> {
        let start = self.current_byte_index();
        self.expect('(');
        let child = self.parse_alternation(Some(')'), Some(start))?;
        if child == PatternNode::Dummy {
            return Err(PatternError::EmptyGroup {
                pattern: self.pattern.to_string(),
                start,
            });
        }
        Ok(PatternNode::Group(Box::new(child)))
    }

    fn parse_literal(&mut self) -> PatternResult<PatternNode> {
        let mut text = String::new();
        while let Some(ch) = self.peek() {
            match ch {
                '/' | '.' | '(' | ')' | ':' | '*' | '|' => break,
                '\\' => text.push(self.consume_escaped()?),
                _ => {
                    text.push(ch);
                    self.next();
                }
            }
        }
        Ok(PatternNode::Literal(text))
    }

    /// Reads the identifier after `:` or `*`.
    fn parse_name(&mut self) -> PatternResult<SymbolNode> {
        let marker_index = self.current_byte_index();
        self.next();

        let mut name = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                name.push(ch);
                self.next();
            } else {
                break;
            }
        }

        if name.is_empty() {
            return Err(PatternError::MissingName {
                pattern: self.pattern.to_string(),
                index: marker_index,
            });
        }

        let first = name.as_bytes()[0];
        if !(first.is_ascii_alphabetic() || first == b'_') {
            return Err(PatternError::InvalidNameStart {
                pattern: self.pattern.to_string(),
                name: name.clone(),
                found: first as char,
            });
        }

        Ok(SymbolNode::new(name))
    }

    fn consume_escaped(&mut self) -> PatternResult<char> {
        let escape_index = self.current_byte_index();
        self.next();
        match self.next() {
            Some(ch) => Ok(ch),
            None => Err(PatternError::LoneEscape {
                pattern: self.pattern.to_string(),
                index: escape_index,
            }),
        }
    }

    fn expect(&mut self, expected: char) {
        let actual = self.next();
        debug_assert_eq!(Some(expected), actual);
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.index).map(|(_, ch)| *ch)
    }

    fn next(&mut self) -> Option<char> {
        let ch = self.peek();
        if ch.is_some() {
            self.index += 1;
        }
        ch
    }

    fn current_byte_index(&self) -> usize {
        self.chars
            .get(self.index)
            .map(|(idx, _)| *idx)
            .unwrap_or(self.pattern.len())
    }
}
