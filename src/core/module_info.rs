//! In-memory model of one parsed `module-info.java` descriptor.
//!
//! A [`ModuleInfo`] holds the descriptor's own module name and, per
//! [`Directive`] kind, the referenced module names in source order.
//! Construction is a single pass over the descriptor text; the value is
//! immutable afterwards. A missing descriptor file yields an empty model
//! rather than an error, so analysis can run on projects that have not
//! been modularized yet.

use crate::core::naming::source_set_to_module_name;
use std::path::{Path, PathBuf};

/// The `requires` directive kinds that produce dependency declarations.
///
/// `RequiresRuntime` has no JPMS syntax of its own; it is expressed as
/// `requires /*runtime*/ some.module;` in the descriptor, the marker
/// comment keeping the file valid Java while recording runtime-only intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    Requires,
    RequiresStatic,
    RequiresTransitive,
    RequiresStaticTransitive,
    RequiresRuntime,
}

impl Directive {
    /// All directive kinds, in declaration-scope order.
    pub const ALL: [Directive; 5] = [
        Directive::Requires,
        Directive::RequiresStatic,
        Directive::RequiresTransitive,
        Directive::RequiresStaticTransitive,
        Directive::RequiresRuntime,
    ];

    /// The dependency scope this directive kind maps to in the build graph.
    pub fn scope(&self) -> &'static str {
        match self {
            Directive::Requires => "implementation",
            Directive::RequiresStatic => "compileOnly",
            Directive::RequiresTransitive => "api",
            Directive::RequiresStaticTransitive => "compileOnlyApi",
            Directive::RequiresRuntime => "runtimeOnly",
        }
    }

    fn index(&self) -> usize {
        match self {
            Directive::Requires => 0,
            Directive::RequiresStatic => 1,
            Directive::RequiresTransitive => 2,
            Directive::RequiresStaticTransitive => 3,
            Directive::RequiresRuntime => 4,
        }
    }
}

/// One parsed module descriptor.
#[derive(Debug, Clone)]
pub struct ModuleInfo {
    /// The descriptor's own declared module name. `None` for an empty
    /// (missing or unparseable) descriptor.
    module_name: Option<String>,
    /// Referenced module names per directive kind, in source order.
    directives: [Vec<String>; 5],
    /// Origin of the descriptor, used only for diagnostics.
    file_path: PathBuf,
}

impl ModuleInfo {
    /// Parse a descriptor from its source text.
    pub fn parse(text: &str, file_path: impl Into<PathBuf>) -> Self {
        let tokens = tokenize(text);
        let mut info = ModuleInfo::empty(file_path);
        parse_tokens(&tokens, &mut info);
        info
    }

    /// Read and parse the descriptor at `path`. A missing file yields an
    /// empty model; only the read of an *existing* file can fail, and even
    /// that degrades to empty with a logged warning since descriptors are
    /// optional input.
    pub fn from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::parse(&text, path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::empty(path),
            Err(e) => {
                tracing::warn!("failed to read {}: {e}", path.display());
                Self::empty(path)
            }
        }
    }

    /// An empty model: no module name, no directives.
    pub fn empty(file_path: impl Into<PathBuf>) -> Self {
        Self {
            module_name: None,
            directives: Default::default(),
            file_path: file_path.into(),
        }
    }

    /// The descriptor's own declared module name, if any.
    pub fn module_name(&self) -> Option<&str> {
        self.module_name.as_deref()
    }

    /// The module names declared under the given directive kind, in source
    /// order. Empty for kinds the descriptor does not use.
    pub fn get(&self, directive: Directive) -> &[String] {
        &self.directives[directive.index()]
    }

    /// Origin file of this descriptor.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Derive the module name prefix of this descriptor relative to its
    /// (project, source set) identity.
    ///
    /// By convention the declared module name ends with the suffix
    /// [`source_set_to_module_name`] produces; the prefix is whatever
    /// precedes it. An empty prefix means the module name *is* the suffix
    /// (root module). `None` means the declared name does not follow the
    /// convention, in which case project matching is skipped during
    /// resolution. This is a heuristic: the relationship between declared
    /// name and project identity is not otherwise validated.
    pub fn module_name_prefix(&self, project_name: &str, source_set_name: &str) -> Option<String> {
        let module_name = self.module_name.as_deref()?;
        let suffix = source_set_to_module_name(project_name, source_set_name);
        if module_name == suffix {
            Some(String::new())
        } else if module_name.ends_with(&format!(".{suffix}")) {
            Some(module_name[..module_name.len() - suffix.len() - 1].to_string())
        } else {
            None
        }
    }

    fn push(&mut self, directive: Directive, module_name: String) {
        self.directives[directive.index()].push(module_name);
    }
}

#[derive(Debug, PartialEq)]
enum Token {
    Word(String),
    /// The `/*runtime*/` marker comment after `requires`.
    RuntimeMarker,
    Semicolon,
    OpenBrace,
    CloseBrace,
}

/// Tokenize descriptor text: comments are skipped, except a block comment
/// whose body is exactly `runtime`, which is kept as a marker token.
fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = text.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            ';' => {
                chars.next();
                tokens.push(Token::Semicolon);
            }
            '{' => {
                chars.next();
                tokens.push(Token::OpenBrace);
            }
            '}' => {
                chars.next();
                tokens.push(Token::CloseBrace);
            }
            '/' => {
                chars.next();
                match chars.peek() {
                    Some('/') => {
                        // line comment
                        for c in chars.by_ref() {
                            if c == '\n' {
                                break;
                            }
                        }
                    }
                    Some('*') => {
                        chars.next();
                        let mut body = String::new();
                        let mut prev = '\0';
                        for c in chars.by_ref() {
                            if prev == '*' && c == '/' {
                                body.pop();
                                break;
                            }
                            body.push(c);
                            prev = c;
                        }
                        if body.trim() == "runtime" {
                            tokens.push(Token::RuntimeMarker);
                        }
                    }
                    // stray slash, not valid module-info syntax; skip
                    _ => {}
                }
            }
            _ => {
                let mut word = String::new();
                while let Some(&c) = chars.peek() {
                    if c.is_whitespace() || matches!(c, ';' | '{' | '}' | '/') {
                        break;
                    }
                    word.push(c);
                    chars.next();
                }
                tokens.push(Token::Word(word));
            }
        }
    }
    tokens
}

fn parse_tokens(tokens: &[Token], info: &mut ModuleInfo) {
    let mut i = 0;

    // module header: [open] module <name> {
    while i < tokens.len() {
        if let Token::Word(w) = &tokens[i] {
            if w == "module" {
                if let Some(Token::Word(name)) = tokens.get(i + 1) {
                    info.module_name = Some(name.clone());
                    i += 2;
                }
                break;
            }
        }
        i += 1;
    }

    // directive statements up to each semicolon
    while i < tokens.len() {
        if !matches!(&tokens[i], Token::Word(w) if w == "requires") {
            // skip to end of statement (exports, opens, uses, provides, ...)
            while i < tokens.len() && tokens[i] != Token::Semicolon {
                i += 1;
            }
            i += 1;
            continue;
        }
        i += 1;

        let mut is_static = false;
        let mut is_transitive = false;
        let mut is_runtime = false;
        let mut name: Option<&str> = None;
        while i < tokens.len() && tokens[i] != Token::Semicolon {
            match &tokens[i] {
                Token::Word(w) if w == "static" => is_static = true,
                Token::Word(w) if w == "transitive" => is_transitive = true,
                Token::RuntimeMarker => is_runtime = true,
                Token::Word(w) => name = Some(w),
                _ => {}
            }
            i += 1;
        }
        i += 1; // past the semicolon

        if let Some(name) = name {
            let directive = if is_runtime {
                Directive::RequiresRuntime
            } else {
                match (is_static, is_transitive) {
                    (true, true) => Directive::RequiresStaticTransitive,
                    (true, false) => Directive::RequiresStatic,
                    (false, true) => Directive::RequiresTransitive,
                    (false, false) => Directive::Requires,
                }
            };
            info.push(directive, name.to_string());
        }
    }
}
