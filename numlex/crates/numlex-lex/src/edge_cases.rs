//! Edge case tests for numlex-lex
