//! Snapshot of every derived value, and the labeled rows shown to the user.

use super::analyzer::{Analyzer, Boundary};
use crate::models::{Address, Family, HostCount, Ipv6Scope};
use serde::Serialize;

/// A row of analysis output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub label: &'static str,
    pub value: String,
    /// Binary digits, only on address rows.
    pub binary: Option<String>,
}

impl ReportRow {
    fn new(label: &'static str, value: impl ToString) -> Self {
        ReportRow {
            label,
            value: value.to_string(),
            binary: None,
        }
    }

    fn with_binary(label: &'static str, addr: Address) -> Self {
        ReportRow {
            label,
            value: addr.to_string(),
            binary: Some(addr.to_binary_string()),
        }
    }
}

/// All values derived from one [`Analyzer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub cidr: Analyzer,
    pub family: Family,
    pub ip: Address,
    pub network: Address,
    pub netmask: Address,
    pub prefix: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broadcast: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<Ipv6Scope>,
    pub first_host: Address,
    pub last_host: Address,
    pub num_hosts: HostCount,
    pub private: bool,
}

impl Report {
    pub fn new(analyzer: &Analyzer) -> Self {
        let (first_host, last_host) = analyzer.host_range();
        let (broadcast, scope) = match analyzer.boundary() {
            Boundary::Broadcast(addr) => (Some(addr), None),
            Boundary::Scope(scope) => (None, Some(scope)),
        };
        Report {
            cidr: *analyzer,
            family: analyzer.family(),
            ip: analyzer.ip(),
            network: analyzer.network(),
            netmask: analyzer.netmask(),
            prefix: analyzer.cidr(),
            broadcast,
            scope,
            first_host,
            last_host,
            num_hosts: analyzer.num_hosts(),
            private: analyzer.is_private(),
        }
    }

    /// Usable range as text; a single address when the range is one host.
    pub fn usable_range(&self) -> String {
        if self.first_host == self.last_host {
            self.first_host.to_string()
        } else {
            format!("{} - {}", self.first_host, self.last_host)
        }
    }

    /// Rows in display order.
    pub fn rows(&self) -> Vec<ReportRow> {
        let mut rows = vec![
            ReportRow::with_binary("IP Address", self.ip),
            ReportRow::with_binary("Network Address", self.network),
            ReportRow::with_binary("Netmask", self.netmask),
            ReportRow::new("CIDR Notation", format!("/{}", self.prefix)),
        ];
        if let Some(broadcast) = self.broadcast {
            rows.push(ReportRow::new("Broadcast Address", broadcast));
        }
        if let Some(scope) = self.scope {
            rows.push(ReportRow::new("IPv6 Scope", scope));
        }
        rows.push(ReportRow::new("Usable IP Range", self.usable_range()));
        rows.push(ReportRow::new("Number of Hosts", self.num_hosts));
        rows.push(ReportRow::new(
            "Private IP",
            if self.private { "Yes" } else { "No" },
        ));
        rows
    }
}

impl From<&Analyzer> for Report {
    fn from(analyzer: &Analyzer) -> Self {
        Report::new(analyzer)
    }
}
