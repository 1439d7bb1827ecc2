use factory_framework::Variation;
use factory_recipe::clients::furniture_lines;
use factory_recipe::furniture::{factory_for, ArDekoFactory, FurnitureFactory, FurnitureStyle};

/// The sofa from the ArDeko factory describes itself as product B1.
#[test]
fn test_ardeko_sofa_describes_itself() {
    let factory = ArDekoFactory;
    assert_eq!(
        factory.create_sofa().useful_function_b(),
        "The result of the product B1."
    );
}

/// An ArDeko sofa collaborating with an ArDeko table yields the matched pair.
#[test]
fn test_ardeko_sofa_collaborates_with_ardeko_table() {
    let factory = ArDekoFactory;
    let table = factory.create_table();
    assert_eq!(
        factory.create_sofa().another_useful_function_b(table.as_ref()),
        "The result of the B1 collaborating with the (The result of the product A1.)"
    );
}

/// Every product from a style's factory carries that style's index.
#[test]
fn test_products_report_style_index() {
    for &style in FurnitureStyle::all() {
        let factory = factory_for(style);
        let n = style.index();

        assert_eq!(
            factory.create_table().useful_function_a(),
            format!("The result of the product A{n}.")
        );
        assert_eq!(
            factory.create_sofa().useful_function_b(),
            format!("The result of the product B{n}.")
        );
    }
}

/// The collaboration format holds for every sofa/table pairing, matched or not.
#[test]
fn test_collaboration_format_across_styles() {
    for &sofa_style in FurnitureStyle::all() {
        for &table_style in FurnitureStyle::all() {
            let sofa = factory_for(sofa_style).create_sofa();
            let table = factory_for(table_style).create_table();

            let expected = format!(
                "The result of the B{} collaborating with the ({})",
                sofa_style.index(),
                table.useful_function_a()
            );
            assert_eq!(sofa.another_useful_function_b(table.as_ref()), expected);
        }
    }
}

/// Calling an operation twice gives byte-identical output.
#[test]
fn test_operations_are_idempotent() {
    let factory = factory_for(FurnitureStyle::Modern);
    let table = factory.create_table();
    let sofa = factory.create_sofa();

    assert_eq!(table.useful_function_a(), table.useful_function_a());
    assert_eq!(sofa.useful_function_b(), sofa.useful_function_b());
    assert_eq!(
        sofa.another_useful_function_b(table.as_ref()),
        sofa.another_useful_function_b(table.as_ref())
    );
}

/// The same client code produces each style's lines when handed its factory.
#[test]
fn test_client_follows_factory() {
    let ardeko = furniture_lines(factory_for(FurnitureStyle::ArDeko).as_ref());
    let modern = furniture_lines(factory_for(FurnitureStyle::Modern).as_ref());

    assert_eq!(ardeko[0], "The result of the product B1.");
    assert_eq!(modern[0], "The result of the product B2.");
    assert_eq!(
        modern[1],
        "The result of the B2 collaborating with the (The result of the product A2.)"
    );
}
