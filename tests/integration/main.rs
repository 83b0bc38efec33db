// 統合テストのエントリポイント

#[path = "../fixtures/mod.rs"]
mod fixtures;

mod test_cli_config;
mod test_end_to_end;
mod test_generation_policies;
mod test_invariant;
mod test_main_entry_point;
