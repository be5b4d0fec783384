//! Vocabulary IRIs used by the term model and the standard extension functions

/// XML Schema datatypes
pub mod xsd {
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
    pub const FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";

    // Integer subtypes
    pub const LONG: &str = "http://www.w3.org/2001/XMLSchema#long";
    pub const INT: &str = "http://www.w3.org/2001/XMLSchema#int";
    pub const SHORT: &str = "http://www.w3.org/2001/XMLSchema#short";
    pub const BYTE: &str = "http://www.w3.org/2001/XMLSchema#byte";
    pub const NON_NEGATIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#nonNegativeInteger";
    pub const NON_POSITIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#nonPositiveInteger";
    pub const NEGATIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#negativeInteger";
    pub const POSITIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#positiveInteger";
    pub const UNSIGNED_LONG: &str = "http://www.w3.org/2001/XMLSchema#unsignedLong";
    pub const UNSIGNED_INT: &str = "http://www.w3.org/2001/XMLSchema#unsignedInt";
    pub const UNSIGNED_SHORT: &str = "http://www.w3.org/2001/XMLSchema#unsignedShort";
    pub const UNSIGNED_BYTE: &str = "http://www.w3.org/2001/XMLSchema#unsignedByte";

    /// Datatypes derived from `xsd:integer`
    pub const INTEGER_TYPES: &[&str] = &[
        INTEGER,
        LONG,
        INT,
        SHORT,
        BYTE,
        NON_NEGATIVE_INTEGER,
        NON_POSITIVE_INTEGER,
        NEGATIVE_INTEGER,
        POSITIVE_INTEGER,
        UNSIGNED_LONG,
        UNSIGNED_INT,
        UNSIGNED_SHORT,
        UNSIGNED_BYTE,
    ];

    /// Check whether `datatype` is one of the numeric datatypes
    pub fn is_numeric(datatype: &str) -> bool {
        datatype == DECIMAL || datatype == DOUBLE || datatype == FLOAT || INTEGER_TYPES.contains(&datatype)
    }
}

/// RDF vocabulary
pub mod rdf {
    pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
}

/// XPath functions namespace used for extension function tags
pub mod fn_ {
    pub const STARTS_WITH: &str = "http://www.w3.org/2005/xpath-functions#starts-with";
    pub const ENDS_WITH: &str = "http://www.w3.org/2005/xpath-functions#ends-with";
    pub const CONTAINS: &str = "http://www.w3.org/2005/xpath-functions#contains";
    pub const STRING_LENGTH: &str = "http://www.w3.org/2005/xpath-functions#string-length";
    pub const UPPER_CASE: &str = "http://www.w3.org/2005/xpath-functions#upper-case";
    pub const LOWER_CASE: &str = "http://www.w3.org/2005/xpath-functions#lower-case";
    pub const NOT: &str = "http://www.w3.org/2005/xpath-functions#not";
    pub const BOOLEAN: &str = "http://www.w3.org/2005/xpath-functions#boolean";
}
