use crate::AppError;

use lw_config::Ports;

#[test]
fn given_config_error_when_converted_then_message_kept() {
    // Given
    let source = "3001".parse::<Ports>().unwrap_err();

    // When
    let error = AppError::from(source);

    // Then
    let message = error.to_string();
    assert!(message.starts_with("Config error: Ports error:"), "{message}");
    assert!(message.contains("'3001'"), "{message}");
}

#[test]
fn given_io_error_when_converted_then_io_variant() {
    // When
    let error = AppError::from(std::io::Error::other("boom"));

    // Then
    assert!(matches!(error, AppError::Io(_)));
    assert_eq!(error.to_string(), "IO error: boom");
}
