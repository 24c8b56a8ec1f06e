//! Static default catalog.
//!
//! Used to initialize an empty store and to additively back-fill products
//! that were deleted from storage (see [`crate::catalog::CatalogStore`]).

use tabletap_core::{Category, Price, Product, ProductId, ProductKind};

/// The default category list, in preferred display order.
#[must_use]
pub fn seed_categories() -> Vec<Category> {
    ["Starters", "Main Courses", "Desserts", "Beverages"]
        .into_iter()
        .map(Category::from)
        .collect()
}

/// The default product catalog.
#[must_use]
pub fn seed_products() -> Vec<Product> {
    use ProductKind::{NonVeg, Veg};

    vec![
        product(
            "PROD-001",
            "Chicken Biryani",
            220,
            "Aromatic & spicy rice dish with tender chicken",
            "Main Courses",
            NonVeg,
            "https://static.vecteezy.com/system/resources/previews/067/390/426/large_2x/chicken-biryani-dish-served-on-black-plate-in-natural-light-free-photo.jpg",
        ),
        product(
            "PROD-002",
            "Paneer Butter Masala",
            180,
            "Creamy & rich cottage cheese curry",
            "Main Courses",
            Veg,
            "https://vegecravings.com/wp-content/uploads/2017/04/paneer-butter-masala-recipe-step-by-step-instructions.jpg",
        ),
        product(
            "PROD-003",
            "Veg Noodles",
            150,
            "Stir-fried noodles with fresh vegetables",
            "Main Courses",
            Veg,
            "https://myfoodstory.com/wp-content/uploads/2021/02/Vegetable-Hakka-Noodles-Restaurant-Style-3.jpg",
        ),
        product(
            "PROD-004",
            "Mutton Curry",
            250,
            "Rich & spicy slow-cooked mutton gravy",
            "Main Courses",
            NonVeg,
            "https://maunikagowardhan.co.uk/wp-content/uploads/2015/04/Kadai-Gosht1-1024x683.jpg",
        ),
        product(
            "PROD-005",
            "Veg Salad",
            120,
            "Fresh garden vegetables with light dressing",
            "Starters",
            Veg,
            "https://cdn.jwplayer.com/v2/media/wGEqBtuf/thumbnails/qSXwlEH3.jpg?width=1280",
        ),
        product(
            "PROD-006",
            "Butter Naan",
            60,
            "Soft tandoori bread brushed with butter",
            "Main Courses",
            Veg,
            "https://media.gettyimages.com/id/1298748782/photo/traditional-indian-naan-flatbread.jpg",
        ),
        product(
            "PROD-007",
            "Dal Tadka",
            160,
            "Tempered yellow lentils with aromatic spices",
            "Main Courses",
            Veg,
            "https://www.indianhealthyrecipes.com/wp-content/uploads/2021/02/dal-fry.webp",
        ),
        product(
            "PROD-008",
            "Chicken Tikka Masala",
            240,
            "Grilled chicken in creamy tomato sauce",
            "Main Courses",
            NonVeg,
            "https://www.allrecipes.com/thmb/239867chef-johns-chicken-tikka-masala.jpg",
        ),
        product(
            "PROD-009",
            "Palak Paneer",
            190,
            "Cottage cheese in creamy spinach gravy",
            "Main Courses",
            Veg,
            "https://www.foodandwine.com/thmb/palak-paneer-with-pressed-ricotta.jpg",
        ),
        product(
            "PROD-010",
            "Gulab Jamun",
            90,
            "Soft fried dumplings soaked in rose syrup",
            "Desserts",
            Veg,
            "https://media.istockphoto.com/id/668147754/photo/gulab-jamun.jpg",
        ),
        product(
            "PROD-011",
            "Mango Lassi",
            80,
            "Refreshing sweet yogurt drink with mango",
            "Beverages",
            Veg,
            "https://www.cookwithmanali.com/wp-content/uploads/2015/04/Mango-Lassi-Recipe.jpg",
        ),
        product(
            "PROD-012",
            "Masala Chai",
            50,
            "Spiced Indian tea with milk",
            "Beverages",
            Veg,
            "https://www.teaforturmeric.com/wp-content/uploads/2020/01/Masala-Chai-Tea-Recipe.jpg",
        ),
        product(
            "PROD-013",
            "Fresh Lime Soda",
            60,
            "Zesty lime soda - sweet or salted",
            "Beverages",
            Veg,
            "https://www.vegrecipesofindia.com/wp-content/uploads/2014/06/lime-soda-recipe-1.jpg",
        ),
        product(
            "PROD-014",
            "Vegetable Samosa",
            80,
            "Crispy pastry filled with spiced potatoes and peas",
            "Starters",
            Veg,
            "https://www.vegrecipesofindia.com/wp-content/uploads/2019/11/samosa-recipe-4.jpg",
        ),
        product(
            "PROD-015",
            "Chicken 65",
            180,
            "Spicy deep-fried chicken appetizer",
            "Starters",
            NonVeg,
            "https://www.indianhealthyrecipes.com/wp-content/uploads/2022/03/chicken-65-recipe.jpg",
        ),
        product(
            "PROD-016",
            "Onion Bhaji",
            100,
            "Crispy fried onion fritters with spices",
            "Starters",
            Veg,
            "https://www.kitchensanctuary.com/wp-content/uploads/2021/03/Onion-Bhaji-square-FS-34.jpg",
        ),
        product(
            "PROD-017",
            "Butter Chicken",
            260,
            "Tender chicken in rich buttery tomato sauce",
            "Main Courses",
            NonVeg,
            "https://www.recipetineats.com/wp-content/uploads/2019/01/Butter-Chicken_5.jpg",
        ),
        product(
            "PROD-018",
            "Lamb Rogan Josh",
            280,
            "Aromatic Kashmiri lamb curry with yogurt and spices",
            "Main Courses",
            NonVeg,
            "https://www.kitchensanctuary.com/wp-content/uploads/2020/07/Rogan-Josh-square-FS-38.jpg",
        ),
        product(
            "PROD-019",
            "Aloo Gobi",
            140,
            "Spiced potato and cauliflower stir-fry",
            "Main Courses",
            Veg,
            "https://www.teaforturmeric.com/wp-content/uploads/2020/02/Aloo-Gobi-Recipe.jpg",
        ),
        product(
            "PROD-020",
            "Rasmalai",
            120,
            "Soft cheese patties in creamy milk syrup with pistachios",
            "Desserts",
            Veg,
            "https://www.cookwithmanali.com/wp-content/uploads/2019/07/Rasmalai-Recipe.jpg",
        ),
        product(
            "PROD-021",
            "Jalebi",
            80,
            "Crispy pretzel-shaped sweets soaked in sugar syrup",
            "Desserts",
            Veg,
            "https://www.vegrecipesofindia.com/wp-content/uploads/2020/10/jalebi-recipe.jpg",
        ),
        product(
            "PROD-022",
            "Falooda",
            130,
            "Chilled rose-flavored milk drink with vermicelli and basil seeds",
            "Beverages",
            Veg,
            "https://www.cookwithmanali.com/wp-content/uploads/2014/05/Falooda-Recipe.jpg",
        ),
        product(
            "PROD-023",
            "Thandai",
            100,
            "Cooling spiced milk drink with nuts and saffron",
            "Beverages",
            Veg,
            "https://www.vegrecipesofindia.com/wp-content/uploads/2021/02/thandai-recipe.jpg",
        ),
    ]
}

fn product(
    id: &str,
    name: &str,
    price: u32,
    description: &str,
    category: &str,
    kind: ProductKind,
    image: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        description: description.to_owned(),
        price: Price::from(price),
        image: Some(image.to_owned()),
        category: Category::from(category),
        kind,
        available: true,
    }
}
