//! Built-in emission factors
//!
//! The reference table shipped with the binary, built once on first use.

use std::sync::OnceLock;

use crate::domain::entities::{ActivityDefinition, Catalog};
use crate::domain::value_objects::Category;
use crate::domain::value_objects::Category::{Energy, Food, Transportation};

struct Row {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: Category,
    factor: f64,
}

const fn row(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: Category,
    factor: f64,
) -> Row {
    Row {
        id,
        name,
        description,
        category,
        factor,
    }
}

// kg CO2 per km / kWh / kg.
const ROWS: &[Row] = &[
    row("car", "Carro (média)", "Automóvel convencional com gasolina", Transportation, 0.192),
    row("car_electric", "Carro Elétrico", "Veículo 100% elétrico recarregável", Transportation, 0.05),
    row("motorcycle", "Moto/Scooter", "Motocicleta ou scooter", Transportation, 0.071),
    row("bus", "Ônibus", "Transporte público coletivo", Transportation, 0.089),
    row("train", "Trem", "Transporte ferroviário", Transportation, 0.041),
    row("flight_short", "Avião (voo curto)", "Voos domésticos ou de curta distância", Transportation, 0.255),
    row("flight_long", "Avião (voo longo)", "Voos internacionais ou de longa distância", Transportation, 0.195),
    row("electricity", "Eletricidade (média)", "Consumo geral de eletricidade da rede", Energy, 0.42),
    row("electricity_renewable", "Eletricidade (renovável)", "Eletricidade de fontes renováveis", Energy, 0.05),
    row("natural_gas", "Gás Natural", "Gás natural para aquecimento/cozinha", Energy, 0.204),
    row("coal", "Carvão", "Energia gerada a partir de carvão", Energy, 0.995),
    row("heating_oil", "Óleo de Aquecimento", "Óleo combustível para aquecimento", Energy, 0.267),
    row("beef", "Carne Vermelha (Bife)", "Carne de vaca produzida com alto impacto ambiental", Food, 27.0),
    row("chicken", "Frango", "Carne de frango produzida com menor impacto", Food, 6.9),
    row("fish", "Peixe", "Peixe de água doce ou salgada", Food, 5.0),
    row("dairy", "Produtos Lácteos (Queijo)", "Queijo, manteiga e derivados de leite", Food, 23.5),
    row("vegetables", "Vegetais (média)", "Alface, tomate, cenoura, etc.", Food, 2.0),
    row("fruits", "Frutas (média)", "Maçã, banana, laranja, etc.", Food, 1.5),
    row("grains", "Grãos/Cereais", "Arroz, trigo, milho, etc.", Food, 1.5),
];

fn unit_for(category: Category) -> &'static str {
    match category {
        Transportation => "km",
        Energy => "kWh",
        Food => "kg",
    }
}

fn build() -> Catalog {
    let activities = ROWS
        .iter()
        .map(|r| {
            ActivityDefinition::new(r.id, r.name, unit_for(r.category), r.category, r.factor)
                .with_description(r.description)
        })
        .collect();

    match Catalog::new(activities) {
        Ok(catalog) => catalog,
        // The table is static; covered by `builtin_table_is_valid`.
        Err(e) => unreachable!("built-in catalog is invalid: {e}"),
    }
}

/// The shipped catalog
pub fn builtin_catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(build)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::ActivityCatalog;

    #[test]
    fn builtin_table_is_valid() {
        let activities = ROWS
            .iter()
            .map(|r| ActivityDefinition::new(r.id, r.name, "u", r.category, r.factor))
            .collect();
        assert!(Catalog::new(activities).is_ok());
    }

    #[test]
    fn builtin_has_nineteen_activities() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.len(), 19);
        assert_eq!(catalog.list_by_category(Transportation).len(), 7);
        assert_eq!(catalog.list_by_category(Energy).len(), 5);
        assert_eq!(catalog.list_by_category(Food).len(), 7);
    }

    #[test]
    fn builtin_reference_factors() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.factor_of("car"), 0.192);
        assert_eq!(catalog.factor_of("electricity"), 0.42);
        assert_eq!(catalog.factor_of("beef"), 27.0);
    }

    #[test]
    fn builtin_units_follow_category() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.lookup("train").map(|a| a.unit.as_str()), Some("km"));
        assert_eq!(catalog.lookup("coal").map(|a| a.unit.as_str()), Some("kWh"));
        assert_eq!(catalog.lookup("fish").map(|a| a.unit.as_str()), Some("kg"));
    }

    #[test]
    fn builtin_order_is_authored_order() {
        let ids: Vec<&str> = builtin_catalog()
            .list_by_category(Energy)
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec![
                "electricity",
                "electricity_renewable",
                "natural_gas",
                "coal",
                "heating_oil"
            ]
        );
    }
}
