use serde::Serialize;

/// One Cypher query plus the fixed result-formatting options the
/// transactional endpoint expects. Field order matches the wire body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Statement {
    pub statement: String,
    #[serde(rename = "resultDataContents")]
    pub result_data_contents: Vec<String>,
    #[serde(rename = "includeStats")]
    pub include_stats: bool,
}

impl Statement {
    /// Wraps a query string with `resultDataContents: ["REST", "GRAPH"]`
    /// and `includeStats: true`.
    pub fn new(statement: impl Into<String>) -> Self {
        Self {
            statement: statement.into(),
            result_data_contents: vec!["REST".to_owned(), "GRAPH".to_owned()],
            include_stats: true,
        }
    }
}

/// Body of one `POST /db/{database}/tx` request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatementBatch {
    pub statements: Vec<Statement>,
}

#[cfg(test)]
mod tests {
    use super::{Statement, StatementBatch};

    #[test]
    fn statement_serializes_with_camel_case_keys() {
        let json = serde_json::to_string(&Statement::new("MATCH (n) RETURN n"))
            .expect("statement must serialize");
        assert_eq!(
            json,
            r#"{"statement":"MATCH (n) RETURN n","resultDataContents":["REST","GRAPH"],"includeStats":true}"#
        );
    }

    #[test]
    fn batch_preserves_statement_order() {
        let batch = StatementBatch {
            statements: vec![Statement::new("a"), Statement::new("b")],
        };
        let json = serde_json::to_string(&batch).expect("batch must serialize");
        assert_eq!(
            json,
            r#"{"statements":[{"statement":"a","resultDataContents":["REST","GRAPH"],"includeStats":true},{"statement":"b","resultDataContents":["REST","GRAPH"],"includeStats":true}]}"#
        );
    }

    #[test]
    fn empty_batch_serializes_to_empty_statements_array() {
        let batch = StatementBatch { statements: vec![] };
        let json = serde_json::to_string(&batch).expect("batch must serialize");
        assert_eq!(json, r#"{"statements":[]}"#);
    }
}
