#[cfg(test)]
mod tests {
    use status_updater::config::Config;
    use status_updater::fields::Role;
    use status_updater::tui::form::StatusForm;
    use tempfile::tempdir;

    #[test]
    fn test_saved_config_seeds_a_new_form() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.actor_name = "Priya".to_string();
        config.role = Role::Qa;
        config.project = "Urban Space".to_string();
        config.save(&path).unwrap();

        let loaded = Config::load(&path);
        let form = StatusForm::new(&loaded);
        assert_eq!(form.actor_name.value, "Priya");
        assert_eq!(form.selected_role(), Role::Qa);
        assert_eq!(form.project.value, "Urban Space");
    }

    #[test]
    fn test_show_time_preference_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.show_time = true;
        config.save(&path).unwrap();

        let form = StatusForm::new(&Config::load(&path));
        assert!(form.show_time);
    }
}
