use crate::recipe::{RawField, Recipe};

/// name, ingredients, instructions, cook time in minutes
const SAMPLE: [(&str, &str, &str, u32); 20] = [
    ("Spaghetti Carbonara",
     "spaghetti pasta, eggs, pancetta, parmesan cheese, black pepper, salt",
     "Boil pasta. Mix eggs, cheese. Cook pancetta. Combine all while pasta is hot.", 20),
    ("Vegetable Stir Fry",
     "broccoli, carrots, bell peppers, snap peas, garlic, ginger, soy sauce, vegetable oil",
     "Heat oil. Stir-fry garlic and ginger. Add vegetables. Add soy sauce. Serve hot.", 15),
    ("Chocolate Chip Cookies",
     "flour, butter, sugar, brown sugar, eggs, vanilla extract, chocolate chips, baking soda, salt",
     "Cream butter and sugars. Add eggs and vanilla. Mix dry ingredients. Add chocolate chips. Bake at 375°F for 10 minutes.", 25),
    ("Chicken Curry",
     "chicken thighs, curry powder, onions, garlic, ginger, coconut milk, tomatoes, cilantro",
     "Brown chicken. Add onions, garlic, and ginger. Add curry powder. Add coconut milk and tomatoes. Simmer. Serve with rice.", 40),
    ("Greek Salad",
     "cucumber, tomatoes, red onion, feta cheese, olives, olive oil, lemon juice, oregano",
     "Chop vegetables. Mix with feta and olives. Dress with olive oil and lemon juice. Sprinkle oregano.", 10),
    ("Mushroom Risotto",
     "arborio rice, mushrooms, onion, garlic, white wine, vegetable broth, parmesan cheese, butter",
     "Sauté onions and mushrooms. Add rice and toast. Add wine. Gradually add broth. Stir constantly. Finish with butter and cheese.", 30),
    ("Apple Pie",
     "flour, butter, sugar, apples, cinnamon, nutmeg, lemon juice, salt",
     "Make dough. Mix apples with sugar and spices. Assemble pie. Bake at 375°F for 45 minutes.", 60),
    ("Beef Tacos",
     "ground beef, taco seasoning, tortillas, lettuce, tomatoes, cheese, sour cream, salsa",
     "Brown beef with taco seasoning. Warm tortillas. Assemble tacos with toppings.", 25),
    ("Vegetable Soup",
     "vegetable broth, carrots, celery, onions, potatoes, tomatoes, peas, garlic, herbs",
     "Sauté onions, carrots, and celery. Add broth and potatoes. Simmer. Add remaining vegetables. Season and serve.", 45),
    ("Banana Bread",
     "ripe bananas, flour, sugar, eggs, butter, baking soda, salt, vanilla extract",
     "Mash bananas. Mix with butter and sugar. Add eggs and vanilla. Mix in dry ingredients. Bake at 350°F for 60 minutes.", 65),
    ("Vegetarian Lasagna",
     "lasagna noodles, tomato sauce, ricotta cheese, spinach, zucchini, eggplant, mozzarella, parmesan",
     "Cook lasagna noodles. Layer with vegetables, sauce, and cheeses. Bake at 375°F for 45 minutes.", 55),
    ("Chicken Alfredo",
     "fettuccine pasta, chicken breasts, heavy cream, garlic, parmesan cheese, butter, salt, pepper",
     "Cook pasta. Sauté chicken until done. Add garlic and cream. Stir in cheese. Toss with pasta.", 30),
    ("Homemade Pizza",
     "pizza dough, tomato sauce, mozzarella cheese, pepperoni, bell peppers, mushrooms, basil",
     "Roll out dough. Add sauce and toppings. Bake at 475°F for 12 minutes.", 25),
    ("Beef Stew",
     "beef chuck, potatoes, carrots, onions, celery, beef broth, tomato paste, garlic, herbs",
     "Brown beef. Add vegetables and broth. Simmer for 2 hours. Add potatoes and cook until tender.", 120),
    ("Tomato Soup",
     "tomatoes, onions, garlic, vegetable broth, cream, basil, olive oil, sugar",
     "Sauté onions and garlic. Add tomatoes and simmer. Blend until smooth. Add cream and seasoning.", 30),
    ("Vegetable Biryani",
     "basmati rice, mixed vegetables, yogurt, ginger, garlic, garam masala, turmeric, cumin, coriander",
     "Sauté spices. Add vegetables and rice. Add water and cook until rice is tender.", 45),
    ("Spinach Quiche",
     "eggs, spinach, onion, cheese, heavy cream, pie crust, nutmeg, salt, pepper",
     "Mix eggs, cream, and fillings. Pour into crust. Bake at 375°F for 35 minutes.", 40),
    ("Chicken Noodle Soup",
     "chicken, egg noodles, carrots, celery, onion, chicken broth, garlic, thyme, bay leaf",
     "Simmer chicken in broth. Remove and shred. Cook vegetables in broth. Add chicken and noodles.", 35),
    ("Vegan Black Bean Burger",
     "black beans, quinoa, bell peppers, onion, garlic, cumin, bread crumbs, avocado",
     "Mash beans. Mix with quinoa and vegetables. Form patties. Pan-fry until crispy.", 25),
    ("Shrimp Scampi",
     "shrimp, linguine pasta, garlic, butter, white wine, lemon juice, red pepper flakes, parsley",
     "Cook pasta. Sauté garlic in butter. Add shrimp, wine, and lemon. Toss with pasta.", 20),
];

/// Built-in 20-recipe dataset used when no data source can be read.
pub fn sample_recipes() -> Vec<Recipe> {
    SAMPLE
        .iter()
        .map(|(name, ingredients, instructions, cook_time)| Recipe {
            name: name.to_string(),
            ingredients: RawField::Text(ingredients.to_string()).into_ingredients(),
            instructions: RawField::Text(instructions.to_string()).into_instructions(),
            cook_time: *cook_time,
        })
        .collect()
}
