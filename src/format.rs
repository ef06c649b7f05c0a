//! TOON format reference.
//!
//! This module documents the wire format the crate implements; it holds
//! no code.
//!
//! # Grammar
//!
//! ```text
//! document  := value-line+
//! header    := key? '[' '#'? N (TAB|'|')? ']' fieldlist? ':' rest?
//! fieldlist := '{' field (D field)* '}'
//! key       := ident | quoted
//! field     := ident | quoted
//! ident     := [A-Za-z_][A-Za-z0-9_.]*
//! quoted    := '"' (char | '\' escape)* '"'
//! escape    := '"' | '\' | 'n' | 'r' | 't'
//! primitive := 'null' | 'true' | 'false' | number | ident-string | quoted
//! list-item := '- ' (primitive | header-tail | first-field kv-tail?)
//! ```
//!
//! Indentation is significant; lines are separated by `\n` and `\r` is
//! not stripped. Depth is `indent / indent_size` with a default indent
//! size of 2.
//!
//! # Objects
//!
//! One `key: value` pair per line; nested objects indent one level:
//!
//! ```text
//! user:
//!   id: 123
//!   name: Ada
//! ```
//!
//! Keys outside the identifier pattern are quoted: `"user-id": 1`.
//! An empty object is a bare `key:` with nothing nested beneath it.
//!
//! # Arrays
//!
//! Every array header declares its length; the body must match it
//! exactly. Three shapes:
//!
//! **Inline**, when every element is primitive:
//!
//! ```text
//! tags[3]: reading,gaming,music
//! empty[0]:
//! ```
//!
//! **Tabular**, when all elements are objects sharing the first
//! element's keys in order with primitive cells:
//!
//! ```text
//! items[2]{sku,qty,price}:
//!   A1,2,9.99
//!   B2,1,14.5
//! ```
//!
//! **List**, for everything else, one `- ` item per line. An item
//! object's first field shares the hyphen line:
//!
//! ```text
//! items[2]:
//!   - id: 1
//!     name: First
//!   - id: 2
//!     name: Second
//! ```
//!
//! # Strings and quoting
//!
//! Strings are bare whenever that cannot be misread: quoting is required
//! for the empty string, untrimmed strings, `true`/`false`/`null`,
//! anything numeric-looking (including leading-zero integers such as
//! `05`), strings containing `:` `"` `\` `[` `]` `{` `}`, newlines,
//! carriage returns, tabs or the active delimiter, and strings starting
//! with `-`. Inside quotes only the five escapes `\"` `\\` `\n` `\r`
//! `\t` exist; all other characters pass through literally.
//!
//! # Delimiters
//!
//! `,` (default), tab, or `|`. Non-comma delimiters appear as a suffix
//! inside the bracket (`[3|]`, `[2	]`), scoping the delimiter to that
//! header and its body. Only the active delimiter forces quoting.
//!
//! # Length markers
//!
//! With the `length_marker` encode option, lengths render as `[#N]`.
//! The decoder accepts both `[N]` and `[#N]` everywhere.
//!
//! # Strict mode
//!
//! The decoder defaults to strict mode, which rejects tabs in
//! indentation, indents that are not multiples of the indent size, blank
//! lines inside array bodies, and surplus body lines beyond a header's
//! declared count. Lenient mode tolerates all of these, computing depth
//! by floor division.
