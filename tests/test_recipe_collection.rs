use recipe_catalog::{NewRecipe, Recipe, RecipeCollection, RecipeUpdate, SearchField};

fn recipe(title: &str, category: &str) -> Recipe {
    Recipe {
        title: title.to_string(),
        category: category.to_string(),
        ..Default::default()
    }
}

fn pancakes_collection() -> RecipeCollection {
    let mut collection = RecipeCollection::new();
    collection.load(vec![recipe("Pancakes", "BREAKFAST")]);
    collection
}

fn titles<'a>(recipes: impl Iterator<Item = &'a Recipe>) -> Vec<&'a str> {
    recipes.map(|r| r.title.as_str()).collect()
}

#[test]
fn test_category_filter_is_case_insensitive() {
    let collection = pancakes_collection();
    assert_eq!(titles(collection.view(Some("breakfast"))), vec!["Pancakes"]);
    assert_eq!(titles(collection.view(Some("BREAKFAST"))), vec!["Pancakes"]);
    assert!(collection.view(Some("lunch")).next().is_none());
}

#[test]
fn test_add_then_filter_keeps_insertion_order() {
    let mut collection = pancakes_collection();
    assert!(collection.add(NewRecipe::new("Tea").category("DRINKS")));

    assert_eq!(titles(collection.view(Some("breakfast"))), vec!["Pancakes"]);
    assert_eq!(titles(collection.view(None)), vec!["Pancakes", "Tea"]);
}

#[test]
fn test_search_term_filters_titles() {
    let mut collection = pancakes_collection();
    collection.add(NewRecipe::new("Tea").category("DRINKS"));
    collection.set_search_term("pan");

    assert_eq!(titles(collection.view(None)), vec!["Pancakes"]);
}

#[test]
fn test_empty_search_term_returns_everything() {
    let mut collection = RecipeCollection::new();
    collection.load(vec![
        recipe("Pancakes", "BREAKFAST"),
        recipe("Tea", "DRINKS"),
        recipe("Soup", ""),
    ]);
    collection.set_search_term("tea");
    assert_eq!(collection.view(None).count(), 1);

    collection.set_search_term("");
    assert_eq!(titles(collection.view(None)), vec!["Pancakes", "Tea", "Soup"]);
}

#[test]
fn test_category_and_search_compose() {
    let mut collection = RecipeCollection::new();
    collection.load(vec![
        recipe("Banana Pancakes", "BREAKFAST"),
        recipe("Potato Pancakes", "SIDE DISHES"),
        recipe("Porridge", "BREAKFAST"),
    ]);
    collection.set_search_term("PANCAKE");

    assert_eq!(
        titles(collection.view(Some("breakfast"))),
        vec!["Banana Pancakes"]
    );
    assert_eq!(collection.view(None).count(), 2);
    assert!(collection.view(Some("dinner")).next().is_none());
}

#[test]
fn test_search_scope_follows_configuration() {
    let records = vec![
        Recipe {
            title: "Pancakes".to_string(),
            category: "BREAKFAST".to_string(),
            code: "BR-12".to_string(),
            ..Default::default()
        },
        recipe("Lemonade", "DRINKS"),
    ];

    let mut title_only = RecipeCollection::new();
    title_only.load(records.clone());
    title_only.set_search_term("br-12");
    assert_eq!(title_only.view(None).count(), 0);

    let mut all_fields = RecipeCollection::with_search_fields(SearchField::ALL);
    all_fields.load(records);
    all_fields.set_search_term("br-12");
    assert_eq!(titles(all_fields.view(None)), vec!["Pancakes"]);

    all_fields.set_search_term("drinks");
    assert_eq!(titles(all_fields.view(None)), vec!["Lemonade"]);
}

#[test]
fn test_every_result_contains_the_term() {
    let mut collection = RecipeCollection::with_search_fields(SearchField::ALL);
    collection.load(vec![
        recipe("Apple Pie", "DESSERTS"),
        recipe("Pineapple Juice", "DRINKS"),
        recipe("Grilled Cheese", "LUNCH"),
        recipe("Caramel Apples", "DESSERTS"),
    ]);
    collection.set_search_term("APPLE");

    let results: Vec<&Recipe> = collection.view(None).collect();
    assert_eq!(results.len(), 3);
    for recipe in results {
        let haystack = format!("{} {} {}", recipe.title, recipe.category, recipe.code);
        assert!(haystack.to_lowercase().contains("apple"));
    }
}

#[test]
fn test_add_defaults() {
    let mut collection = pancakes_collection();
    assert!(collection.add(NewRecipe::new("Tea").category("DRINKS").code("D-1")));

    let added: Vec<&Recipe> = collection.view(None).filter(|r| r.title == "Tea").collect();
    assert_eq!(added.len(), 1);
    assert_eq!(collection.records().last().unwrap().title, "Tea");

    let tea = added[0];
    assert_eq!(tea.category, "DRINKS");
    assert_eq!(tea.code, "D-1");
    assert!(tea.ingredients.is_empty());
    assert!(tea.instructions.is_empty());
    assert!(tea.tags.is_empty());
    assert_eq!(tea.notes, "");
    assert_eq!(tea.story, "");
    assert_eq!(tea.photo, "");

    let date = tea.date_added.as_deref().unwrap();
    assert_eq!(date.len(), 10);
    assert!(chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok());
}

#[test]
fn test_add_allows_duplicate_titles() {
    let mut collection = pancakes_collection();
    assert!(collection.add(NewRecipe::new("Pancakes")));
    assert_eq!(collection.len(), 2);
    assert_eq!(
        collection.find_by_title("Pancakes").unwrap().category,
        "BREAKFAST"
    );
}

#[test]
fn test_add_blank_title_is_noop() {
    let mut collection = pancakes_collection();
    assert!(!collection.add(NewRecipe::new("  ").category("DRINKS")));
    assert_eq!(collection.len(), 1);
}

#[test]
fn test_repeated_remove_takes_successive_records() {
    let mut collection = RecipeCollection::new();
    collection.load(vec![
        recipe("A", ""),
        recipe("B", ""),
        recipe("C", ""),
        recipe("D", ""),
    ]);

    assert!(collection.remove(1));
    assert!(collection.remove(1));
    assert_eq!(titles(collection.view(None)), vec!["A", "D"]);
}

#[test]
fn test_remove_out_of_range_is_noop() {
    let mut collection = pancakes_collection();
    let before = collection.records().to_vec();
    assert!(!collection.remove(1));
    assert!(!collection.remove(usize::MAX));
    assert_eq!(collection.records(), before.as_slice());
}

#[test]
fn test_update_out_of_range_is_noop() {
    let mut collection = pancakes_collection();
    collection.add(NewRecipe::new("Tea"));
    let before = collection.records().to_vec();

    let update = RecipeUpdate::default().title("Coffee").category("DRINKS");
    assert!(!collection.update(5, update));
    assert_eq!(collection.records(), before.as_slice());
}

#[test]
fn test_update_overwrites_only_supplied_fields() {
    let mut collection = pancakes_collection();
    assert!(collection.update(0, RecipeUpdate::default().code("  B-7 ")));

    let updated = &collection.records()[0];
    assert_eq!(updated.title, "Pancakes");
    assert_eq!(updated.category, "BREAKFAST");
    assert_eq!(updated.code, "B-7");
}

#[test]
fn test_edit_mode_survives_mutations() {
    let mut collection = pancakes_collection();
    collection.set_edit_mode(true);
    collection.add(NewRecipe::new("Tea"));
    collection.update(0, RecipeUpdate::default().title("Crepes"));
    collection.remove(1);
    assert!(collection.is_editing());
}

#[test]
fn test_export_roundtrip_after_mutations() {
    let mut collection = RecipeCollection::new();
    collection.load(vec![
        Recipe {
            title: "Pancakes".to_string(),
            category: "BREAKFAST".to_string(),
            ingredients: vec!["flour".to_string(), "milk".to_string()],
            instructions: vec!["Whisk".to_string(), "Fry".to_string()],
            notes: "Rest the batter".to_string(),
            photo: "img/pancakes.jpg".to_string(),
            tags: vec!["sweet".to_string()],
            ..Default::default()
        },
        recipe("Tea", "DRINKS"),
    ]);
    collection.add(NewRecipe::new("Toast").category("BREAKFAST"));
    collection.update(1, RecipeUpdate::default().title("Green Tea"));
    collection.remove(0);

    let json = collection.export().unwrap();
    let back: Vec<Recipe> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, collection.records());

    // Export has no side effects and is reproducible
    assert_eq!(collection.export().unwrap(), json);
}
