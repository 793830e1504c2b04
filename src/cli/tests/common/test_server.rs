use assert_cmd::assert::Assert;
use assert_cmd::Command;
use mockito::{Mock, ServerGuard};
use tempfile::TempDir;

/// A mock tracer API plus an empty working directory to run the CLI in, so no
/// stray `tracer.toml` is picked up.
pub struct TestServer {
    pub server: ServerGuard,
    pub dir: TempDir,
}

impl TestServer {
    pub fn launch() -> Self {
        Self {
            server: mockito::Server::new(),
            dir: TempDir::new().expect("Failed to create working directory"),
        }
    }

    pub fn mock_json(&mut self, method: &str, path: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock(method, path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create()
    }

    pub fn write_file(&self, name: &str, contents: &str) -> String {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("Failed to write input file");
        path.to_string_lossy().into_owned()
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("tracer").unwrap();
        cmd.current_dir(self.dir.path());
        cmd.env_remove("TRACER_SERVER");
        cmd.env_remove("RUST_LOG");
        cmd.timeout(std::time::Duration::from_secs(30));
        cmd
    }

    pub fn send_command(&self, command: &[&str]) -> Assert {
        self.command()
            .arg("--server")
            .arg(self.server.host_with_port())
            .args(command)
            .assert()
    }
}
