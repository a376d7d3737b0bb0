use std::fmt;

/// An ordered sequence of statements: the whole file, or the body of a
/// `name { ... }` statement.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Block {
    statements: Vec<Statement>,
}

/// Words of one directive, plus the block it opened if it ended in `{`
/// rather than `;`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Statement {
    tokens: Vec<String>,
    child: Option<Block>,
}

impl Block {
    pub fn new(statements: Vec<Statement>) -> Block {
        Block { statements }
    }

    pub(crate) fn push(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Statement> {
        self.statements.iter()
    }

    /// Statements of this block whose first token is `name`.
    pub fn matching<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Statement> + 'a {
        self.statements.iter().filter(move |s| s.name() == name)
    }

    pub fn find(&self, name: &str) -> Option<&Statement> {
        self.statements.iter().find(|s| s.name() == name)
    }

    /// Walks down through child blocks, taking the first statement named by
    /// each element of `path`. The last element names the statement returned.
    pub fn path(&self, path: &[&str]) -> Option<&Statement> {
        let (last, parents) = path.split_last()?;
        let mut current = self;
        for name in parents {
            current = current.find(name)?.child()?;
        }
        current.find(last)
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        for statement in &self.statements {
            statement.write_indented(f, depth)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Block {
    type Item = &'a Statement;
    type IntoIter = std::slice::Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}

impl Statement {
    pub fn new(tokens: Vec<String>, child: Option<Block>) -> Statement {
        Statement { tokens, child }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// First token, the directive name.
    pub fn name(&self) -> &str {
        self.tokens.first().map(String::as_str).unwrap_or("")
    }

    pub fn args(&self) -> &[String] {
        self.tokens.get(1..).unwrap_or(&[])
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    pub fn child(&self) -> Option<&Block> {
        self.child.as_ref()
    }

    pub fn has_child(&self) -> bool {
        self.child.is_some()
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        write!(f, "{}{}", indent, self.tokens.join(" "))?;
        match &self.child {
            Some(block) => {
                writeln!(f, " {{")?;
                block.write_indented(f, depth + 1)?;
                writeln!(f, "{}}}", indent)
            }
            None => writeln!(f, ";"),
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}
