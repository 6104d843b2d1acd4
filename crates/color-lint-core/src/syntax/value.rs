//! Tokenizer for declaration values and at-rule parameters.
//!
//! Splits a value such as `1px solid rgb(0, 0, 0)` into words, strings,
//! dividers, and nested function calls. Tokenizing never fails: malformed
//! input (unclosed strings or parentheses) yields best-effort tokens.

/// A token in a tokenized value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueNode {
    /// A bare word: keyword, number, hex literal, variable reference, ...
    Word {
        /// Word text.
        value: String,
    },
    /// A quoted string.
    String {
        /// Quote character used.
        quote: char,
        /// Contents without the quotes.
        value: String,
    },
    /// A function call, e.g. `rgb(0, 0, 0)`. A bare `( ... )` group has an
    /// empty name.
    Function {
        /// Callee name.
        name: String,
        /// Argument tokens.
        nodes: Vec<ValueNode>,
    },
    /// A `,`, `/`, or `:` divider.
    Div {
        /// Divider character.
        value: char,
    },
    /// A run of whitespace.
    Space,
    /// A `/* ... */` comment.
    Comment {
        /// Comment body.
        value: String,
    },
}

/// Tokenizes a value string.
#[must_use]
pub fn parse_value(text: &str) -> Vec<ValueNode> {
    let mut tokenizer = Tokenizer {
        chars: text.chars().collect(),
        pos: 0,
    };
    tokenizer.nodes(false)
}

/// Returns a lazy depth-first iterator over `nodes` and all nested
/// function arguments.
#[must_use]
pub fn walk_values(nodes: &[ValueNode]) -> ValueWalker<'_> {
    ValueWalker {
        stack: vec![nodes.iter()],
        depth: 0,
    }
}

/// Iterator returned by [`walk_values`].
#[derive(Debug)]
pub struct ValueWalker<'a> {
    stack: Vec<std::slice::Iter<'a, ValueNode>>,
    depth: usize,
}

impl ValueWalker<'_> {
    /// Function nesting depth of the node last returned by `next`; zero for
    /// top-level tokens.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl<'a> Iterator for ValueWalker<'a> {
    type Item = &'a ValueNode;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let iter = self.stack.last_mut()?;
            match iter.next() {
                Some(node) => {
                    self.depth = self.stack.len() - 1;
                    if let ValueNode::Function { nodes, .. } = node {
                        self.stack.push(nodes.iter());
                    }
                    return Some(node);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

struct Tokenizer {
    chars: Vec<char>,
    pos: usize,
}

impl Tokenizer {
    fn peek(&self, ahead: usize) -> Option<char> {
        self.chars.get(self.pos + ahead).copied()
    }

    fn nodes(&mut self, in_function: bool) -> Vec<ValueNode> {
        let mut nodes = Vec::new();
        while let Some(c) = self.peek(0) {
            match c {
                ')' if in_function => {
                    self.pos += 1;
                    return nodes;
                }
                c if c.is_whitespace() => {
                    while self.peek(0).is_some_and(char::is_whitespace) {
                        self.pos += 1;
                    }
                    nodes.push(ValueNode::Space);
                }
                '"' | '\'' => nodes.push(self.string(c)),
                '/' if self.peek(1) == Some('*') => nodes.push(self.comment()),
                ',' | '/' | ':' => {
                    self.pos += 1;
                    nodes.push(ValueNode::Div { value: c });
                }
                '(' => {
                    self.pos += 1;
                    let inner = self.nodes(true);
                    nodes.push(ValueNode::Function {
                        name: String::new(),
                        nodes: inner,
                    });
                }
                _ => nodes.push(self.word_or_function()),
            }
        }
        nodes
    }

    fn string(&mut self, quote: char) -> ValueNode {
        self.pos += 1;
        let mut value = String::new();
        while let Some(c) = self.peek(0) {
            self.pos += 1;
            if c == quote {
                break;
            }
            value.push(c);
            if c == '\\' {
                if let Some(escaped) = self.peek(0) {
                    value.push(escaped);
                    self.pos += 1;
                }
            }
        }
        ValueNode::String { quote, value }
    }

    fn comment(&mut self) -> ValueNode {
        self.pos += 2;
        let mut value = String::new();
        while let Some(c) = self.peek(0) {
            if c == '*' && self.peek(1) == Some('/') {
                self.pos += 2;
                break;
            }
            value.push(c);
            self.pos += 1;
        }
        ValueNode::Comment { value }
    }

    fn word_or_function(&mut self) -> ValueNode {
        let mut value = String::new();
        while let Some(c) = self.peek(0) {
            if c.is_whitespace() || matches!(c, '"' | '\'' | '(' | ',' | '/' | ':') {
                break;
            }
            if c == ')' {
                if value.is_empty() {
                    // stray close paren at top level
                    value.push(c);
                    self.pos += 1;
                }
                break;
            }
            value.push(c);
            self.pos += 1;
            if c == '\\' {
                if let Some(escaped) = self.peek(0) {
                    value.push(escaped);
                    self.pos += 1;
                }
            }
        }

        if self.peek(0) != Some('(') {
            return ValueNode::Word { value };
        }
        self.pos += 1;

        if value.eq_ignore_ascii_case("url") && !self.next_is_quoted() {
            return ValueNode::Function {
                name: value,
                nodes: self.raw_url(),
            };
        }

        let nodes = self.nodes(true);
        ValueNode::Function { name: value, nodes }
    }

    fn next_is_quoted(&self) -> bool {
        self.chars[self.pos..]
            .iter()
            .copied()
            .find(|c| !c.is_whitespace())
            .is_some_and(|c| matches!(c, '"' | '\''))
    }

    /// Reads an unquoted `url(...)` body as a single word.
    fn raw_url(&mut self) -> Vec<ValueNode> {
        let mut body = String::new();
        while let Some(c) = self.peek(0) {
            self.pos += 1;
            if c == ')' {
                break;
            }
            body.push(c);
        }
        let body = body.trim();
        if body.is_empty() {
            Vec::new()
        } else {
            vec![ValueNode::Word {
                value: body.to_string(),
            }]
        }
    }
}
