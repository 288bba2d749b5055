use recipe_scraper::extractors::{Extraction, Extractor, HtmlClassExtractor, ParsingContext};

fn extract(html: &str) -> Extraction {
    let context = ParsingContext::new("https://example.com/recipe", html);
    HtmlClassExtractor.extract(&context)
}

#[test]
fn test_microdata_itemprops() {
    let html = r#"
    <html>
        <head><title>Cookies | My Blog</title></head>
        <body>
            <h1>Chocolate Chip Cookies</h1>
            <div itemscope itemtype="https://schema.org/Recipe">
                <ul>
                    <li itemprop="recipeIngredient">2 cups all-purpose flour</li>
                    <li itemprop="recipeIngredient">1 cup butter, softened</li>
                    <li itemprop="recipeIngredient">Ingredients (US cup = 240ml)</li>
                </ul>
                <ol itemprop="recipeInstructions">
                    <li>Preheat oven to 350°F</li>
                    <li>Mix butter and sugar until fluffy</li>
                </ol>
            </div>
        </body>
    </html>
    "#;

    let Extraction::Found(recipe) = extract(html) else {
        panic!("expected a recipe");
    };

    assert_eq!(recipe.title, "Chocolate Chip Cookies");
    assert_eq!(
        recipe.ingredients,
        vec!["2 cups all-purpose flour", "1 cup butter, softened"]
    );
    assert_eq!(
        recipe.instructions,
        vec!["Preheat oven to 350°F", "Mix butter and sugar until fluffy"]
    );
    assert_eq!(recipe.serves, None);
    assert_eq!(recipe.total_time_minutes, None);
    assert_eq!(recipe.source_url, "https://example.com/recipe");
}

#[test]
fn test_list_class_selectors() {
    let html = r#"
    <html>
        <head><meta property="og:title" content="Weeknight Risotto"></head>
        <body>
            <ul class="ingredients">
                <li>1 cup arborio rice</li>
                <li>4 cups stock</li>
            </ul>
            <ol class="instructions">
                <li>Instructions</li>
                <li>Toast the rice in butter.</li>
                <li>Add stock one ladle at a time.</li>
            </ol>
        </body>
    </html>
    "#;

    let Extraction::Found(recipe) = extract(html) else {
        panic!("expected a recipe");
    };

    assert_eq!(recipe.title, "Weeknight Risotto");
    assert_eq!(recipe.ingredients, vec!["1 cup arborio rice", "4 cups stock"]);
    assert_eq!(
        recipe.instructions,
        vec!["Toast the rice in butter.", "Add stock one ladle at a time."]
    );
}

#[test]
fn test_class_contains_fallback() {
    let html = r#"
    <html>
        <head><title>Rice Bowl</title></head>
        <body>
            <div class="recipe-ingredient-row">1 cup rice</div>
            <div class="recipe-ingredient-row">2 cups water</div>
            <p class="step-instruction-text">Rinse the rice until the water runs clear.</p>
        </body>
    </html>
    "#;

    let Extraction::Found(recipe) = extract(html) else {
        panic!("expected a recipe");
    };

    assert_eq!(recipe.title, "Rice Bowl");
    assert_eq!(recipe.ingredients, vec!["1 cup rice", "2 cups water"]);
    assert_eq!(
        recipe.instructions,
        vec!["Rinse the rice until the water runs clear."]
    );
}

#[test]
fn test_first_matching_selector_wins() {
    // The itemprop match stops the search even though .ingredient also matches
    let html = r#"
    <html><body>
        <span itemprop="recipeIngredient">3 eggs</span>
        <span class="ingredient">should not be collected</span>
    </body></html>
    "#;

    let Extraction::Found(recipe) = extract(html) else {
        panic!("expected a recipe");
    };
    assert_eq!(recipe.ingredients, vec!["3 eggs"]);
    assert!(recipe.instructions.is_empty());
    assert_eq!(recipe.title, "Untitled Recipe");
}

#[test]
fn test_single_checkbox_element_is_split() {
    let html = r#"
    <html><body>
        <div class="ingredient">▢ 1 lime▢ 2 tbsp fish sauce▢ 1 tsp sugar</div>
    </body></html>
    "#;

    let Extraction::Found(recipe) = extract(html) else {
        panic!("expected a recipe");
    };
    assert_eq!(
        recipe.ingredients,
        vec!["1 lime", "2 tbsp fish sauce", "1 tsp sugar"]
    );
}

#[test]
fn test_no_recipe_markup() {
    let html = r#"
    <html>
        <head><title>About us</title></head>
        <body><h1>About us</h1><p>We love food.</p></body>
    </html>
    "#;

    assert_eq!(extract(html), Extraction::NotFound);
}
