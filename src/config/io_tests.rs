use super::*;

#[test]
fn test_is_yaml_path() {
    assert!(is_yaml_path(Path::new("panel.yaml")));
    assert!(is_yaml_path(Path::new("panel.YML")));
    assert!(!is_yaml_path(Path::new("panel.json")));
    assert!(!is_yaml_path(Path::new("panel")));
}

#[tokio::test]
async fn test_read_config_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = read_config(&dir.path().join("panel.json")).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_read_config_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("panel.json");
    fs::write(&path, r#"{"displayLimit": 2, "category": "news"}"#)
        .await
        .unwrap();

    let config = read_config(&path).await.unwrap().unwrap();
    assert_eq!(config.display_limit, 2);
    assert_eq!(config.category, "news");
}

#[tokio::test]
async fn test_read_config_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("panel.yaml");
    fs::write(&path, "hourRange:\n  start: 8\n  end: 12\n")
        .await
        .unwrap();

    let config = read_config(&path).await.unwrap().unwrap();
    assert_eq!(config.hour_range.start, 8);
    assert_eq!(config.hour_range.end, 12);
}

#[tokio::test]
async fn test_read_config_rejects_invalid_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("panel.json");
    fs::write(&path, r#"{"hourRange": {"start": 9, "end": 30}}"#)
        .await
        .unwrap();

    let result = read_config(&path).await;
    assert!(matches!(result, Err(ConfigError::Invalid(_))));
}

#[tokio::test]
async fn test_read_config_malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("panel.json");
    fs::write(&path, "{not json").await.unwrap();

    let result = read_config(&path).await;
    assert!(matches!(result, Err(ConfigError::JsonError(_))));
}
