//! 対話による削除確認の実装（CLI 境界）
//!
//! stdin/stderr を用いた対話は adapter 層の責務。

use std::io::{self, BufRead, Write};

use common::error::Error;

use crate::domain::{Approval, Resource};
use crate::ports::outbound::DeleteApproval;

/// stderr に確認を出し、stdin の 1 行を読む。`y` / `yes` のみ承認
#[derive(Debug, Default)]
pub struct CliDeleteApproval;

impl DeleteApproval for CliDeleteApproval {
    fn confirm_delete(&self, resource: &Resource) -> Result<Approval, Error> {
        eprintln!("  [{}] {}", resource.id, resource.title);
        eprint!("您确定要删除此资源吗？ [y/N]: ");
        let _ = io::stderr().flush();

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| Error::io_msg(format!("Failed to read confirmation: {}", e)))?;
        if read == 0 {
            return Ok(Approval::Denied);
        }
        Ok(parse_answer(&line))
    }
}

/// `-y/--yes`: 確認なしで承認
#[derive(Debug, Default)]
pub struct AssumeYesApproval;

impl DeleteApproval for AssumeYesApproval {
    fn confirm_delete(&self, _resource: &Resource) -> Result<Approval, Error> {
        Ok(Approval::Approved)
    }
}

/// `--no-interactive`: プロンプトを出さず常に拒否（CI 等）
#[derive(Debug, Default)]
pub struct NonInteractiveApproval;

impl DeleteApproval for NonInteractiveApproval {
    fn confirm_delete(&self, _resource: &Resource) -> Result<Approval, Error> {
        Ok(Approval::Denied)
    }
}

fn parse_answer(line: &str) -> Approval {
    match line.trim().to_lowercase().as_str() {
        "y" | "yes" | "是" => Approval::Approved,
        _ => Approval::Denied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed::seed_resources;

    #[test]
    fn test_parse_answer() {
        assert_eq!(parse_answer("y\n"), Approval::Approved);
        assert_eq!(parse_answer(" YES "), Approval::Approved);
        assert_eq!(parse_answer("\n"), Approval::Denied);
        assert_eq!(parse_answer("n"), Approval::Denied);
    }

    #[test]
    fn test_non_interactive_always_denied() {
        let r = &seed_resources(0)[0];
        assert_eq!(NonInteractiveApproval.confirm_delete(r).unwrap(), Approval::Denied);
        assert_eq!(AssumeYesApproval.confirm_delete(r).unwrap(), Approval::Approved);
    }
}
