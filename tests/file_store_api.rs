use numz::api::NumzApi;
use numz::config::NumzConfig;
use numz::error::NumzError;
use numz::generator::Generator;
use numz::store::fs::FileStore;
use numz::store::DataStore;
use std::path::Path;
use tempfile::TempDir;

fn api_at(path: &Path, seed: u64) -> NumzApi<FileStore, rand::rngs::StdRng> {
    let config = NumzConfig::default().with_storage_file(path);
    NumzApi::with_generator(FileStore::new(path), config, Generator::seeded(seed))
}

#[test]
fn test_numbers_survive_between_runs() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("generated_numbers.json");

    let mut generated = Vec::new();
    for seed in 0..20 {
        // A fresh api per run, like separate invocations.
        let mut api = api_at(&path, seed);
        let before = api.store().used_numbers().unwrap();
        let result = api.generate_number().unwrap();
        let number = result.affected_entries[0].number;

        let after = api.store().used_numbers().unwrap();
        assert!(!before.contains(&number));
        assert_eq!(after.len(), before.len() + 1);
        generated.push(number);
    }

    let stored: Vec<u32> = FileStore::new(&path)
        .load()
        .unwrap()
        .iter()
        .map(|e| e.number)
        .collect();
    assert_eq!(stored, generated);
}

#[test]
fn test_same_seed_does_not_repeat_across_runs() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("generated_numbers.json");

    let first = api_at(&path, 7).generate_number().unwrap();
    let second = api_at(&path, 7).generate_number().unwrap();

    assert_ne!(
        first.affected_entries[0].number,
        second.affected_entries[0].number
    );
}

#[test]
fn test_add_and_blacklist_share_one_list() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("generated_numbers.json");
    let mut api = api_at(&path, 1);

    api.add_number("5031").unwrap();
    api.blacklist_number("9870").unwrap();

    assert!(matches!(
        api.add_number("9870"),
        Err(NumzError::Unavailable(_))
    ));
    assert!(matches!(
        api.blacklist_number("5031"),
        Err(NumzError::AlreadyExcluded(5031))
    ));

    let result = api.show_numbers().unwrap();
    let numbers: Vec<u32> = result.listed_entries.iter().map(|e| e.number).collect();
    assert_eq!(numbers, vec![5031, 9870]);
    assert_eq!(api.last_number().unwrap().last_number, Some(9870));
}
