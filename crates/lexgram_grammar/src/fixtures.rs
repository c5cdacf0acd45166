//! Built-in JSON language.
//!
//! Serves as the default language of the `lexgram` binary and as a
//! conformance fixture. The strings are config text, the same shape a user
//! would write in a config file, so they go through the regular loaders.

/// Token section of the JSON language, in priority order.
pub const JSON_TOKENS: &str = r#"
LEFT_BRACE    : \{
RIGHT_BRACE   : \}
LEFT_BRACKET  : \[
RIGHT_BRACKET : \]
COLON         : :
COMMA         : ,
BOOLEAN       : true|false
NULL          : null
STRING        : "(?:[^"\\]|\\.)*"
NUMBER        : -?(?:0|[1-9][0-9]*)(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?
WHITESPACE    : \s+
"#;

/// Grammar section of the JSON language.
pub const JSON_GRAMMAR: &str = "
<JSON>      =   BOOLEAN | NULL | STRING | NUMBER | <LIST> | <OBJ>
<LIST>      =   LEFT_BRACKET <JSON> <ITEMS> RIGHT_BRACKET | LEFT_BRACKET RIGHT_BRACKET
<ITEMS>     =   EPSILON | COMMA <JSON> <ITEMS>
<OBJ>       =   LEFT_BRACE STRING COLON <JSON> <ENTRIES> RIGHT_BRACE | LEFT_BRACE RIGHT_BRACE
<ENTRIES>   =   EPSILON | COMMA STRING COLON <JSON> <ENTRIES>
";

/// Name of the token type the recognizer drops before matching.
pub const WHITESPACE: &str = "WHITESPACE";
