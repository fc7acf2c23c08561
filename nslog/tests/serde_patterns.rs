use anyhow::Result;
use nslog::prelude::*;
use nslog::Pattern;

#[test]
fn test_patterns_serialize_as_text() -> Result<()> {
    let patterns = PatternList::parse("foo,bar:*,*");
    let json = serde_json::to_string(&patterns)?;
    assert_eq!(json, "\"foo,bar:*,*\"");

    let back: PatternList = serde_json::from_str(&json)?;
    assert_eq!(back, patterns);

    let factory = LoggerFactory::new(serde_json::from_str("\"net:*\"")?);
    assert!(factory.is_enabled("net:http"));
    assert!(!factory.is_enabled("net"));
    Ok(())
}

#[test]
fn test_single_pattern_from_json() -> Result<()> {
    let patterns: Vec<Pattern> = serde_json::from_str(r#"["*", "db:*", "cache"]"#)?;
    assert_eq!(
        patterns,
        vec![
            Pattern::Any,
            Pattern::Prefix("db:".to_string()),
            Pattern::Exact("cache".to_string()),
        ]
    );
    assert_eq!(serde_json::to_string(&patterns[1])?, "\"db:*\"");
    Ok(())
}
