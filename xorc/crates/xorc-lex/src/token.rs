//! Token definitions.
//!
//! [`TokenKind`] is the closed set of token classifications. Each kind belongs
//! to exactly one [`TokenCategory`] and has a stable upper-case name used by
//! tools that print token streams (`RETURN_ARROW`, `INT_32BIT`, ...).
//!
//! A [`Token`] borrows its text straight out of the source it was scanned
//! from, so producing one never allocates.

use std::borrow::Cow;
use std::fmt;

use xorc_util::Position;

use crate::escape::unescape;

/// Broad grouping of token kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    /// Whitespace and comments.
    Trivia,
    /// The end-of-input marker.
    Terminal,
    /// Punctuation and operators.
    Symbol,
    /// Reserved words.
    Keyword,
    /// Reserved primitive type names.
    PrimitiveType,
    /// Identifiers and literal values.
    Literal,
}

impl TokenCategory {
    /// Lower-case name, as printed by the driver.
    pub const fn name(self) -> &'static str {
        match self {
            TokenCategory::Trivia => "trivia",
            TokenCategory::Terminal => "terminal",
            TokenCategory::Symbol => "symbol",
            TokenCategory::Keyword => "keyword",
            TokenCategory::PrimitiveType => "primitive-type",
            TokenCategory::Literal => "literal",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

macro_rules! token_kinds {
    ($(
        $category:ident {
            $( $(#[$doc:meta])* $variant:ident => $name:literal, )*
        }
    )*) => {
        /// The classification of a token.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum TokenKind {
            $( $( $(#[$doc])* $variant, )* )*
        }

        impl TokenKind {
            /// Every kind, in declaration order.
            pub const ALL: &'static [TokenKind] = &[ $( $( TokenKind::$variant, )* )* ];

            /// Stable upper-case name of this kind.
            pub const fn name(self) -> &'static str {
                match self {
                    $( $( TokenKind::$variant => $name, )* )*
                }
            }

            /// The category this kind belongs to.
            pub const fn category(self) -> TokenCategory {
                match self {
                    $( $( TokenKind::$variant => TokenCategory::$category, )* )*
                }
            }
        }
    };
}

token_kinds! {
    Trivia {
        /// `\n` (or `\r\n`)
        Newline => "NEWLINE",
        /// a single space
        Space => "SPACE",
        /// a single tab
        Tab => "TAB",
        /// `// ...` or `/* ... */`
        Comment => "COMMENT",
    }
    Terminal {
        /// end of input
        Eoi => "EOI",
    }
    Symbol {
        /// `(`
        LParen => "L_PAREN",
        /// `)`
        RParen => "R_PAREN",
        /// `{`
        LBrace => "L_BRACE",
        /// `}`
        RBrace => "R_BRACE",
        /// `[`
        LBracket => "L_BRACKET",
        /// `]`
        RBracket => "R_BRACKET",
        /// `;`
        Semicolon => "SEMICOLON",
        /// `,`
        Comma => "COMMA",
        /// `:`
        Colon => "COLON",
        /// `::`
        DoubleColon => "DOUBLE_COLON",
        /// `.`
        Dot => "DOT",
        /// `..`
        DotDot => "DOT_DOT",
        /// `...`
        Ellipsis => "ELLIPSIS",
        /// `?`
        Question => "QUESTION",
        /// `@`
        At => "AT",
        /// `#`
        Hash => "HASH",
        /// `->`
        ReturnArrow => "RETURN_ARROW",
        /// `=>`
        FatArrow => "FAT_ARROW",
        /// `=`
        Assign => "ASSIGN",
        /// `==`
        Equal => "EQUAL",
        /// `!`
        Bang => "BANG",
        /// `!=`
        NotEqual => "NOT_EQUAL",
        /// `<`
        LAngle => "L_ANGLE",
        /// `<=`
        LessEqual => "LESS_EQUAL",
        /// `<<`
        LeftShift => "LEFT_SHIFT",
        /// `<<=`
        LeftShiftAssign => "LEFT_SHIFT_ASSIGN",
        /// `>`
        RAngle => "R_ANGLE",
        /// `>=`
        GreaterEqual => "GREATER_EQUAL",
        /// `>>`
        RightShift => "RIGHT_SHIFT",
        /// `>>=`
        RightShiftAssign => "RIGHT_SHIFT_ASSIGN",
        /// `&`
        Ampersand => "AMPERSAND",
        /// `&&`
        And => "AND",
        /// `&=`
        AmpersandAssign => "AMPERSAND_ASSIGN",
        /// `|`
        Pipe => "PIPE",
        /// `||`
        Or => "OR",
        /// `|=`
        PipeAssign => "PIPE_ASSIGN",
        /// `^`
        Caret => "CARET",
        /// `^=`
        CaretAssign => "CARET_ASSIGN",
        /// `~`
        Tilde => "TILDE",
        /// `+`
        Plus => "PLUS",
        /// `++`
        Increment => "INCREMENT",
        /// `+=`
        PlusAssign => "PLUS_ASSIGN",
        /// `-`
        Minus => "MINUS",
        /// `--`
        Decrement => "DECREMENT",
        /// `-=`
        MinusAssign => "MINUS_ASSIGN",
        /// `*`
        Star => "STAR",
        /// `*=`
        StarAssign => "STAR_ASSIGN",
        /// `/`
        Slash => "SLASH",
        /// `/=`
        SlashAssign => "SLASH_ASSIGN",
        /// `%`
        Percent => "PERCENT",
        /// `%=`
        PercentAssign => "PERCENT_ASSIGN",
    }
    Keyword {
        /// `fn`
        Fn => "FN",
        /// `return`
        Return => "RETURN",
        /// `let`
        Let => "LET",
        /// `mut`
        Mut => "MUT",
        /// `const`
        Const => "CONST",
        /// `if`
        If => "IF",
        /// `else`
        Else => "ELSE",
        /// `while`
        While => "WHILE",
        /// `for`
        For => "FOR",
        /// `in`
        In => "IN",
        /// `loop`
        Loop => "LOOP",
        /// `break`
        Break => "BREAK",
        /// `continue`
        Continue => "CONTINUE",
        /// `struct`
        Struct => "STRUCT",
        /// `enum`
        Enum => "ENUM",
        /// `impl`
        Impl => "IMPL",
        /// `import`
        Import => "IMPORT",
        /// `pub`
        Pub => "PUB",
        /// `extern`
        Extern => "EXTERN",
        /// `as`
        As => "AS",
        /// `sizeof`
        Sizeof => "SIZEOF",
        /// `unsafe`
        Unsafe => "UNSAFE",
        /// `unsafe_cast`
        UnsafeCast => "UNSAFE_CAST",
        /// `unsafe_ptr`
        UnsafePtr => "UNSAFE_PTR",
    }
    PrimitiveType {
        /// `i8`
        Int8Bit => "INT_8BIT",
        /// `i16`
        Int16Bit => "INT_16BIT",
        /// `i32` or `int`
        Int32Bit => "INT_32BIT",
        /// `i64`
        Int64Bit => "INT_64BIT",
        /// `u8`
        UInt8Bit => "UINT_8BIT",
        /// `u16`
        UInt16Bit => "UINT_16BIT",
        /// `u32`
        UInt32Bit => "UINT_32BIT",
        /// `u64`
        UInt64Bit => "UINT_64BIT",
        /// `f32` or `float`
        Float32Bit => "FLOAT_32BIT",
        /// `f64`
        Float64Bit => "FLOAT_64BIT",
        /// `bool`
        Bool => "BOOL",
        /// `char`
        Char => "CHAR",
        /// `void`
        Void => "VOID",
        /// `uvoid`, the untyped pointee of unsafe pointers
        UnsafeVoid => "UNSAFE_VOID",
    }
    Literal {
        /// `[A-Za-z_][A-Za-z0-9_]*` that is not reserved
        Identifier => "IDENTIFIER",
        /// integer literal
        Number => "NUMBER",
        /// decimal literal with a fractional part
        Decimal => "DECIMAL",
        /// `"..."`
        String => "STRING",
        /// `'.'`
        Character => "CHARACTER",
        /// `true` or `false`
        Boolean => "BOOLEAN",
        /// `null`
        Null => "NULL",
    }
}

impl TokenKind {
    /// Returns true for newline, space, tab and comment tokens.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(self.category(), TokenCategory::Trivia)
    }

    /// Returns true for reserved words, primitive type names included.
    #[inline]
    pub const fn is_reserved(self) -> bool {
        matches!(
            self.category(),
            TokenCategory::Keyword | TokenCategory::PrimitiveType
        ) || matches!(self, TokenKind::Boolean | TokenKind::Null)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Looks up the reserved word spelled `text`.
///
/// Returns `None` when `text` is an ordinary identifier. The match is exact
/// and case-sensitive.
///
/// ```
/// use xorc_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("return"), Some(TokenKind::Return));
/// assert_eq!(keyword_from_ident("int"), Some(TokenKind::Int32Bit));
/// assert_eq!(keyword_from_ident("returning"), None);
/// ```
pub fn keyword_from_ident(text: &str) -> Option<TokenKind> {
    let kind = match text {
        "fn" => TokenKind::Fn,
        "return" => TokenKind::Return,
        "let" => TokenKind::Let,
        "mut" => TokenKind::Mut,
        "const" => TokenKind::Const,
        "if" => TokenKind::If,
        "else" => TokenKind::Else,
        "while" => TokenKind::While,
        "for" => TokenKind::For,
        "in" => TokenKind::In,
        "loop" => TokenKind::Loop,
        "break" => TokenKind::Break,
        "continue" => TokenKind::Continue,
        "struct" => TokenKind::Struct,
        "enum" => TokenKind::Enum,
        "impl" => TokenKind::Impl,
        "import" => TokenKind::Import,
        "pub" => TokenKind::Pub,
        "extern" => TokenKind::Extern,
        "as" => TokenKind::As,
        "sizeof" => TokenKind::Sizeof,
        "unsafe" => TokenKind::Unsafe,
        "unsafe_cast" => TokenKind::UnsafeCast,
        "unsafe_ptr" => TokenKind::UnsafePtr,

        "i8" => TokenKind::Int8Bit,
        "i16" => TokenKind::Int16Bit,
        "i32" | "int" => TokenKind::Int32Bit,
        "i64" => TokenKind::Int64Bit,
        "u8" => TokenKind::UInt8Bit,
        "u16" => TokenKind::UInt16Bit,
        "u32" => TokenKind::UInt32Bit,
        "u64" => TokenKind::UInt64Bit,
        "f32" | "float" => TokenKind::Float32Bit,
        "f64" => TokenKind::Float64Bit,
        "bool" => TokenKind::Bool,
        "char" => TokenKind::Char,
        "void" => TokenKind::Void,
        "uvoid" => TokenKind::UnsafeVoid,

        "true" | "false" => TokenKind::Boolean,
        "null" => TokenKind::Null,
        _ => return None,
    };
    Some(kind)
}

/// A classified, positioned slice of the source.
///
/// `text` is exactly what was consumed, delimiters included; the terminal
/// [`TokenKind::Eoi`] token is the only token with empty text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    /// What the text was classified as.
    pub kind: TokenKind,
    /// The consumed source text.
    pub text: &'src str,
    /// Where the token starts.
    pub position: Position,
}

impl<'src> Token<'src> {
    /// Creates a token.
    #[inline]
    pub const fn new(kind: TokenKind, text: &'src str, position: Position) -> Self {
        Self {
            kind,
            text,
            position,
        }
    }

    /// Length of the text in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// True only for the terminal token.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte offset one past the last byte of this token.
    #[inline]
    pub fn end_offset(&self) -> usize {
        self.position.offset + self.text.len()
    }

    /// See [`TokenKind::is_trivia`].
    #[inline]
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }

    /// True for the end-of-input token.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.kind == TokenKind::Eoi
    }

    /// The decoded value of a string or character literal.
    ///
    /// Delimiters are stripped and escapes resolved. Returns `None` for every
    /// other kind of token.
    ///
    /// ```
    /// use xorc_lex::{Token, TokenKind};
    /// use xorc_util::Position;
    ///
    /// let token = Token::new(TokenKind::String, r#""a\tb""#, Position::START);
    /// assert_eq!(token.literal_value().as_deref(), Some("a\tb"));
    /// ```
    pub fn literal_value(&self) -> Option<Cow<'src, str>> {
        match self.kind {
            TokenKind::String | TokenKind::Character if self.text.len() >= 2 => {
                unescape(&self.text[1..self.text.len() - 1]).ok()
            },
            _ => None,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?}) at {}", self.kind, self.text, self.position)
    }
}
