use tabled::Tabled;

#[derive(Tabled)]
pub(crate) struct UserRow {
    pub user: u32,
    pub outcome: String,
    pub elapsed_ms: u64,
    pub detail: String,
}
