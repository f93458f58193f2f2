#[cfg(test)]
mod tests {
    use status_updater::clipboard::ClipboardPayload;
    use status_updater::fields::{Role, StatusKind};
    use status_updater::format::{format_status, strip_fences};
    use status_updater::parse::parse_status;
    use status_updater::status::FieldBag;

    #[test]
    fn test_copied_block_parses_back_into_fields() {
        let mut fields = FieldBag::default();
        fields.project = "Urban Space".to_string();
        fields.task = "Wire the login flow".to_string();
        fields.actor_name = "Akash".to_string();

        let block = format_status(StatusKind::Start, &fields, Role::Dev, None);
        let parsed = parse_status(&strip_fences(&block));

        assert_eq!(parsed.project.as_deref(), Some("Urban Space"));
        assert_eq!(parsed.task.as_deref(), Some("Wire the login flow"));
        assert_eq!(parsed.actor_name.as_deref(), Some("Akash"));
        assert_eq!(parsed.role, Some(Role::Dev));
    }

    #[test]
    fn test_header_time_survives_the_round_trip() {
        let fields = FieldBag::default();
        let block = format_status(StatusKind::Stop, &fields, Role::Qa, Some("3:11PM"));
        let parsed = parse_status(&block);

        assert_eq!(parsed.captured_time.as_deref(), Some("3:11PM"));
        assert_eq!(parsed.role, Some(Role::Qa));
    }

    #[test]
    fn test_fenced_block_parses_without_stripping() {
        // Pasting the block fences and all must recover the same fields.
        let mut fields = FieldBag::default();
        fields.project = "Ticket Portal".to_string();
        let block = format_status(StatusKind::Pause, &fields, Role::Dev, None);

        let parsed = parse_status(&block);
        assert_eq!(parsed.project.as_deref(), Some("Ticket Portal"));
    }

    #[test]
    fn test_clipboard_payloads_share_visible_text() {
        let fields = FieldBag::default();
        let block = format_status(StatusKind::Pause, &fields, Role::Dev, None);
        let payload = ClipboardPayload::from_block(&block);

        assert!(!payload.plain.contains("```"));
        assert!(payload.plain.starts_with("PAUSE"));
        assert_eq!(payload.html, format!("<pre>{}</pre>", payload.plain));
    }

    #[test]
    fn test_placeholders_parse_as_literal_text() {
        // An untouched form round-trips its placeholders as plain values.
        let block = format_status(StatusKind::Start, &FieldBag::default(), Role::Dev, None);
        let parsed = parse_status(&block);
        assert_eq!(parsed.project.as_deref(), Some("<brand name>"));
        assert_eq!(parsed.actor_name.as_deref(), Some("<your name>"));
    }
}
