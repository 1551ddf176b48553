//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use assert_cmd::Command;
    use std::fs;

    use jsonpc::Document;

    fn jsonpc() -> Command {
        let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
        cmd.env("NO_COLOR", "1")
            .env_remove("JSONPC_ESCAPE_HTML")
            .env_remove("JSONPC_FALLBACK_HEADER")
            .env_remove("JSONPC_PRETTY")
            .env_remove("JSONPC_LOG_LEVEL");
        cmd
    }

    fn stdout_of(cmd: &mut Command) -> String {
        let out = cmd.output().unwrap();
        assert!(
            out.status.success(),
            "stderr: {}",
            String::from_utf8_lossy(&out.stderr)
        );
        String::from_utf8(out.stdout).unwrap()
    }

    #[test]
    fn parse_from_stdin() {
        let stdout = stdout_of(
            jsonpc()
                .args(["parse", "--url", "https://example.com/", "--compact"])
                .write_stdin("<title>Hi There</title><h2>Intro</h2><p>A</p><p>B</p>"),
        );
        let document = Document::from_json(&stdout).unwrap();

        assert_eq!(stdout.trim_end().lines().count(), 1);
        assert_eq!(document.url, "https://example.com/");
        assert_eq!(document.slug, "hi-there");
        assert_eq!(document.content[0].header, "Intro");
    }

    #[test]
    fn parse_file_then_render_file() {
        let dir = tempfile::tempdir().unwrap();
        let html_path = dir.path().join("page.html");
        let json_path = dir.path().join("page.json");
        let out_path = dir.path().join("out.html");
        fs::write(&html_path, "<h3>Steps</h3><ul><li>One</li><li>Two</li></ul>").unwrap();

        jsonpc()
            .arg("parse")
            .arg(&html_path)
            .arg("-o")
            .arg(&json_path)
            .assert()
            .success();
        jsonpc()
            .arg("render")
            .arg(&json_path)
            .arg("--output")
            .arg(&out_path)
            .assert()
            .success();

        let html = fs::read_to_string(&out_path).unwrap();
        assert!(html.contains("<h2>Content</h2>\n<h3>Steps</h3>\n<ul>\n<li>One</li>\n<li>Two</li>\n</ul>"));
    }

    #[test]
    fn render_with_escape_flag() {
        let stdout = stdout_of(
            jsonpc()
                .args(["render", "-", "--escape"])
                .write_stdin(r#"{"title": "a < b"}"#),
        );
        assert!(stdout.contains("<title>a &lt; b</title>"));
    }

    #[test]
    fn config_file_changes_fallback_header() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("jsonpc.toml");
        fs::write(&config_path, "fallback_header = \"Overview\"\npretty = false\n").unwrap();

        let stdout = stdout_of(
            jsonpc()
                .arg("--config")
                .arg(&config_path)
                .arg("parse")
                .write_stdin("<p>Hello</p>"),
        );
        let document = Document::from_json(&stdout).unwrap();
        assert_eq!(document.content[0].header, "Overview");
    }

    #[test]
    fn augment_from_argument_and_stdin() {
        let stdout = stdout_of(jsonpc().args(["augment", "Tell me more", "--mode", "question"]));
        assert!(stdout.starts_with("Tell me more\n\nThe provided content is JSON-PC"));

        let stdout = stdout_of(
            jsonpc()
                .args(["augment", "-m", "response"])
                .write_stdin("  from stdin \n"),
        );
        assert!(stdout.starts_with("from stdin\n\nYour response must be in JSON-PC"));
    }

    #[test]
    fn config_command_prints_effective_settings() {
        let stdout = stdout_of(jsonpc().arg("config"));
        assert!(stdout.contains("fallback_header = \"Content\""));
        assert!(stdout.contains("# JSONPC_ESCAPE_HTML:"));
    }
}

//  ███████╗ █████╗ ██╗██╗     ██╗███╗   ██╗ ██████╗
//  ██╔════╝██╔══██╗██║██║     ██║████╗  ██║██╔════╝
//  █████╗  ███████║██║██║     ██║██╔██╗ ██║██║  ███╗
//  ██╔══╝  ██╔══██║██║██║     ██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║██║███████╗██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚═╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod failing {
    use assert_cmd::Command;

    fn jsonpc() -> Command {
        let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
        cmd.env("NO_COLOR", "1");
        cmd
    }

    #[test]
    fn invalid_mode_exits_with_error() {
        let out = jsonpc()
            .args(["augment", "p", "--mode", "answer"])
            .output()
            .unwrap();

        assert!(!out.status.success());
        assert!(out.stdout.is_empty());
        assert!(String::from_utf8_lossy(&out.stderr).contains("invalid mode \"answer\""));
    }

    #[test]
    fn missing_href_exits_with_error() {
        let out = jsonpc()
            .arg("parse")
            .write_stdin("<h2>H</h2><a>no href</a>")
            .output()
            .unwrap();

        assert!(!out.status.success());
        assert!(String::from_utf8_lossy(&out.stderr).contains("missing required attribute \"href\""));
    }

    #[test]
    fn unreadable_input_file() {
        jsonpc()
            .args(["parse", "/definitely/not/here.html"])
            .assert()
            .failure();
    }

    #[test]
    fn malformed_json_for_render() {
        jsonpc()
            .arg("render")
            .write_stdin("not json")
            .assert()
            .failure();
    }

    #[test]
    fn unknown_encoding_label() {
        jsonpc()
            .args(["parse", "--encoding", "klingon"])
            .write_stdin("<p>x</p>")
            .assert()
            .failure();
    }
}
