// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{MessageTemplate, TabType, WizardSession, WorkspaceTab};
use std::collections::BTreeSet;

pub fn create_inbox_tab() -> WorkspaceTab {
    WorkspaceTab::new(
        TabType::Inbox,
        "main",
        String::from("Inbox"),
        Some(String::from("pending")),
    )
}

pub fn create_detail_tab(case_id: &str) -> WorkspaceTab {
    WorkspaceTab::new(
        TabType::CaseDetail,
        case_id,
        format!("Case {case_id}"),
        Some(case_id.to_string()),
    )
}

pub fn create_audit_tab() -> WorkspaceTab {
    WorkspaceTab::new(TabType::Audit, "main", String::from("Audit log"), None)
}

pub fn create_test_template() -> MessageTemplate {
    MessageTemplate {
        id: String::from("tpl-release"),
        name: String::from("Payment release"),
        body: String::from("Released after review by {{reviewer}} on {{date}}."),
        variables: vec![String::from("reviewer"), String::from("date")],
    }
}

pub fn create_wizard_with_targets(ids: &[&str]) -> WizardSession {
    let targets: BTreeSet<String> = ids.iter().map(ToString::to_string).collect();
    WizardSession::new(targets)
}
