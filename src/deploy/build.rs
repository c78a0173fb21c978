use async_trait::async_trait;
use tokio::process::Command;

use super::{ApplicationBuilder, BuildError, DeployContext};

const STDERR_TAIL: usize = 2048;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandBuilder {
    program: String,
    args: Vec<String>,
}

impl CommandBuilder {
    pub fn new(
        program: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_argv(argv: &[String]) -> Result<Self, BuildError> {
        let (program, args) = argv.split_first().ok_or(BuildError::EmptyCommand)?;
        Ok(Self::new(program.clone(), args.iter().cloned()))
    }
}

fn tail(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut start = text.len() - max;
    while !text.is_char_boundary(start) {
        start += 1;
    }
    &text[start..]
}

#[async_trait]
impl ApplicationBuilder for CommandBuilder {
    async fn build(&self, ctx: &DeployContext) -> Result<(), BuildError> {
        tracing::info!(program = %self.program, args = ?self.args, "running build command");
        let output = Command::new(&self.program)
            .args(&self.args)
            .current_dir(ctx.source_root())
            .output()
            .await
            .map_err(|source| BuildError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BuildError::Failed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: tail(stderr.trim(), STDERR_TAIL).to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argv_splits_into_program_and_args() {
        let argv = vec!["npx".to_string(), "next".to_string(), "build".to_string()];
        assert_eq!(
            CommandBuilder::from_argv(&argv).unwrap(),
            CommandBuilder::new("npx", ["next", "build"])
        );
        assert!(matches!(CommandBuilder::from_argv(&[]), Err(BuildError::EmptyCommand)));
    }

    #[test]
    fn tail_respects_char_boundaries() {
        assert_eq!(tail("abc", 10), "abc");
        assert_eq!(tail("abcdef", 3), "def");
        assert_eq!(tail("aé", 1), "");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn failing_command_is_a_build_error() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = DeployContext::new(dir.path(), "ssr", "edge");
        CommandBuilder::new("true", Vec::<String>::new()).build(&ctx).await.unwrap();
        let err = CommandBuilder::new("false", Vec::<String>::new())
            .build(&ctx)
            .await
            .unwrap_err();
        assert!(matches!(err, BuildError::Failed { .. }));
    }
}
