//! Compiled path expressions over a [`Document`](super::Document).
//!
//! The supported grammar is the slice of XPath the extractors need:
//!
//! ```text
//! path      := ('/' | '//')? step (('/' | '//') step)*
//! step      := ('*' | qname) predicate*
//! predicate := '[' '@' qname ( '=' quoted )? ']'
//! ```
//!
//! A leading `/` or `//` anchors the path at the document node; otherwise it
//! is evaluated relative to the context node. `//` selects descendants, `/`
//! direct children. Names are matched on the qualified name as written in
//! the source, so `tp:taxon-name` matches `<tp:taxon-name>`. Results are
//! always in document order without duplicates.

use std::fmt;
use std::str::FromStr;

use super::document::Node;
use crate::error::{Error, Result};

/// Step axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Child,
    Descendant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum NameTest {
    Any,
    Name(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Predicate {
    HasAttribute(String),
    AttributeEquals(String, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Step {
    axis: Axis,
    test: NameTest,
    predicates: Vec<Predicate>,
}

impl Step {
    fn matches(&self, node: &Node<'_>) -> bool {
        let name_ok = match &self.test {
            NameTest::Any => node.is_element(),
            NameTest::Name(name) => node.name() == Some(name.as_str()),
        };
        name_ok
            && self.predicates.iter().all(|predicate| match predicate {
                Predicate::HasAttribute(attr) => node.has_attribute(attr),
                Predicate::AttributeEquals(attr, value) => {
                    node.attribute(attr) == Some(value.as_str())
                }
            })
    }
}

/// A compiled path expression.
///
/// # Example
///
/// ```
/// use taxpub::model::Path;
///
/// let path = Path::parse("//article-meta/article-id[@pub-id-type='doi']").unwrap();
/// assert!(path.is_absolute());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    absolute: bool,
    steps: Vec<Step>,
}

impl Path {
    /// Compile a path expression.
    pub fn parse(expr: &str) -> Result<Self> {
        PathParser::new(expr).parse()
    }

    /// Whether the path is anchored at the document node.
    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    /// Evaluate the path against a context node.
    pub fn evaluate<'a>(&self, context: Node<'a>) -> Vec<Node<'a>> {
        let start = if self.absolute {
            context.document().root()
        } else {
            context
        };

        let mut current = vec![start];
        for step in &self.steps {
            let mut next = Vec::new();
            for node in &current {
                match step.axis {
                    Axis::Child => {
                        next.extend(node.elements().filter(|child| step.matches(child)));
                    }
                    Axis::Descendant => collect_descendants(*node, step, &mut next),
                }
            }
            next.sort_by_key(|node| node.id());
            next.dedup();
            current = next;
            if current.is_empty() {
                break;
            }
        }
        current
    }
}

/// Pre-order walk below `node`, pushing every matching element.
fn collect_descendants<'a>(node: Node<'a>, step: &Step, out: &mut Vec<Node<'a>>) {
    let mut stack: Vec<Node<'a>> = node.elements().collect();
    stack.reverse();
    while let Some(current) = stack.pop() {
        if step.matches(&current) {
            out.push(current);
        }
        let mut children: Vec<Node<'a>> = current.elements().collect();
        children.reverse();
        stack.extend(children);
    }
}

impl FromStr for Path {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Path::parse(s)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            match step.axis {
                Axis::Descendant => write!(f, "//")?,
                Axis::Child if i > 0 || self.absolute => write!(f, "/")?,
                Axis::Child => {}
            }
            match &step.test {
                NameTest::Any => write!(f, "*")?,
                NameTest::Name(name) => write!(f, "{}", name)?,
            }
            for predicate in &step.predicates {
                match predicate {
                    Predicate::HasAttribute(attr) => write!(f, "[@{}]", attr)?,
                    Predicate::AttributeEquals(attr, value) => {
                        write!(f, "[@{}='{}']", attr, value)?
                    }
                }
            }
        }
        Ok(())
    }
}

struct PathParser<'a> {
    expr: &'a str,
    pos: usize,
}

impl<'a> PathParser<'a> {
    fn new(expr: &'a str) -> Self {
        Self { expr, pos: 0 }
    }

    fn error(&self, message: &str) -> Error {
        Error::InvalidPath(format!("{} at offset {} in '{}'", message, self.pos, self.expr))
    }

    fn rest(&self) -> &'a str {
        &self.expr[self.pos..]
    }

    fn eat(&mut self, token: &str) -> bool {
        if self.rest().starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }

    fn parse(mut self) -> Result<Path> {
        let expr = self.expr.trim();
        if expr.is_empty() {
            return Err(Error::InvalidPath("empty path expression".to_string()));
        }
        self.expr = expr;

        let mut steps = Vec::new();
        let (absolute, mut axis) = if self.eat("//") {
            (true, Axis::Descendant)
        } else if self.eat("/") {
            (true, Axis::Child)
        } else {
            (false, Axis::Child)
        };

        loop {
            steps.push(self.parse_step(axis)?);
            if self.pos == self.expr.len() {
                break;
            }
            axis = if self.eat("//") {
                Axis::Descendant
            } else if self.eat("/") {
                Axis::Child
            } else {
                return Err(self.error("expected '/'"));
            };
        }

        Ok(Path { absolute, steps })
    }

    fn parse_step(&mut self, axis: Axis) -> Result<Step> {
        let test = if self.eat("*") {
            NameTest::Any
        } else {
            NameTest::Name(self.parse_name()?)
        };

        let mut predicates = Vec::new();
        while self.eat("[") {
            if !self.eat("@") {
                return Err(self.error("expected '@' in predicate"));
            }
            let attr = self.parse_name()?;
            let predicate = if self.eat("=") {
                Predicate::AttributeEquals(attr, self.parse_quoted()?)
            } else {
                Predicate::HasAttribute(attr)
            };
            if !self.eat("]") {
                return Err(self.error("expected ']'"));
            }
            predicates.push(predicate);
        }

        Ok(Step {
            axis,
            test,
            predicates,
        })
    }

    fn parse_name(&mut self) -> Result<String> {
        let rest = self.rest();
        let len = rest
            .find(|c: char| matches!(c, '/' | '[' | ']' | '@' | '=' | '*') || c.is_whitespace())
            .unwrap_or(rest.len());
        if len == 0 {
            return Err(self.error("expected a name"));
        }
        self.pos += len;
        Ok(rest[..len].to_string())
    }

    fn parse_quoted(&mut self) -> Result<String> {
        let quote = match self.rest().chars().next() {
            Some(q @ ('\'' | '"')) => q,
            _ => return Err(self.error("expected a quoted value")),
        };
        self.pos += 1;
        let rest = self.rest();
        let end = rest
            .find(quote)
            .ok_or_else(|| self.error("unterminated string"))?;
        self.pos += end + 1;
        Ok(rest[..end].to_string())
    }
}
