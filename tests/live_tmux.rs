//! Live tmux probes.
//!
//! This suite is intentionally `#[ignore]` and is never run by default. It
//! starts a private tmux server on a throwaway socket, drives every tool
//! against it, and kills the server afterwards.
//!
//! Run explicitly:
//! `cargo test --test live_tmux -- --ignored --nocapture`

use serde_json::json;
use std::path::PathBuf;
use std::process::Command;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tmux_mcp::tools::execution::TmuxContext;
use tmux_mcp::tools::ToolRegistry;

struct PrivateServer {
    socket: PathBuf,
    session: String,
}

impl PrivateServer {
    fn start() -> Result<Self, String> {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| e.to_string())?
            .as_nanos();
        let socket = std::env::temp_dir().join(format!("tmux-mcp-live-{nanos}.sock"));
        let session = format!("tmux-mcp-live-{}", std::process::id());
        let server = Self { socket, session };
        server.tmux(&["new-session", "-d", "-s", &server.session, "-x", "120", "-y", "40"])?;
        Ok(server)
    }

    fn tmux(&self, args: &[&str]) -> Result<String, String> {
        let output = Command::new("tmux")
            .arg("-S")
            .arg(&self.socket)
            .args(args)
            .output()
            .map_err(|e| format!("failed to run tmux: {e}"))?;
        if !output.status.success() {
            return Err(String::from_utf8_lossy(&output.stderr).into_owned());
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn registry(&self) -> ToolRegistry {
        let tmux = TmuxContext::local("tmux", Some(self.socket.to_string_lossy().into_owned()));
        ToolRegistry::tmux(tmux).expect("registry")
    }
}

impl Drop for PrivateServer {
    fn drop(&mut self) {
        let _ = self.tmux(&["kill-server"]);
        let _ = std::fs::remove_file(&self.socket);
    }
}

#[tokio::test]
#[ignore = "requires tmux on PATH; run explicitly"]
async fn tools_drive_a_private_tmux_server() {
    let server = PrivateServer::start().expect("start tmux");
    let registry = server.registry();

    let sessions = registry.execute("list_sessions", None).await.unwrap();
    assert!(sessions.starts_with(&format!("{}: 1 windows", server.session)), "{sessions}");

    let windows = registry
        .execute("list_windows", Some(json!({"target": server.session})))
        .await
        .unwrap();
    assert!(windows.starts_with("0: "), "{windows}");

    let split = registry
        .execute(
            "split_pane",
            Some(json!({"direction": "horizontal", "target": server.session})),
        )
        .await
        .unwrap();
    assert_eq!(split, "Pane split horizontally");

    let panes = registry
        .execute("list_panes", Some(json!({"target": server.session})))
        .await
        .unwrap();
    let pane_ids: Vec<String> = panes
        .lines()
        .filter_map(|line| line.split_whitespace().next().map(str::to_string))
        .collect();
    assert_eq!(pane_ids.len(), 2, "{panes}");

    let sent = registry
        .execute(
            "send_command",
            Some(json!({"command": "echo tmux-mcp-live", "target": pane_ids[1]})),
        )
        .await
        .unwrap();
    assert_eq!(
        sent,
        format!("Command sent to pane {}: echo tmux-mcp-live", pane_ids[1])
    );

    tokio::time::sleep(Duration::from_millis(300)).await;
    let captured = server
        .tmux(&["capture-pane", "-p", "-t", &pane_ids[1]])
        .expect("capture");
    assert!(captured.contains("tmux-mcp-live"), "{captured}");

    registry
        .execute("select_pane", Some(json!({"target": pane_ids[0]})))
        .await
        .unwrap();
    let killed = registry
        .execute("kill_pane", Some(json!({"target": pane_ids[1]})))
        .await
        .unwrap();
    assert_eq!(killed, format!("Pane {} killed", pane_ids[1]));

    let all_panes = registry.execute("list_panes", None).await.unwrap();
    assert_eq!(all_panes.lines().count(), 1, "{all_panes}");
    assert!(all_panes.contains(&format!(" in {}:0", server.session)), "{all_panes}");
}

#[tokio::test]
#[ignore = "requires tmux on PATH; run explicitly"]
async fn missing_server_socket_reports_no_server() {
    let socket = std::env::temp_dir().join(format!("tmux-mcp-absent-{}.sock", std::process::id()));
    let tmux = TmuxContext::local("tmux", Some(socket.to_string_lossy().into_owned()));
    let registry = ToolRegistry::tmux(tmux).expect("registry");

    let text = registry.execute("list_sessions", None).await.unwrap();
    assert_eq!(text, "No tmux server running");

    let err = registry
        .execute("kill_pane", Some(json!({"target": "%0"})))
        .await
        .unwrap_err();
    assert!(err.to_string().starts_with("Failed to kill pane: "), "{err}");
}
