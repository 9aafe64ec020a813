//! Template Method
//!
//! The algorithm's order is fixed in one routine (`run` / `prepare`). A
//! variant only supplies step functions: mandatory steps have no default,
//! hooks are `Option`s that do nothing when absent.

/// A step produces the line it would print.
pub type Step = fn() -> String;

/* ============================================================
 * Abstract algorithm: hook -> operation1 -> base step -> operation2
 * ============================================================
 */

#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub hook: Option<Step>,
    pub operation1: Step,
    pub operation2: Step,
}

impl Template {
    pub fn new(operation1: Step, operation2: Step) -> Self {
        Template {
            hook: None,
            operation1,
            operation2,
        }
    }

    pub fn with_hook(mut self, hook: Step) -> Self {
        self.hook = Some(hook);
        self
    }

    pub fn run(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(4);
        if let Some(hook) = self.hook {
            out.push(hook());
        }
        out.push((self.operation1)());
        out.push(Self::base_step());
        out.push((self.operation2)());
        out
    }

    fn base_step() -> String {
        "I belong to the template and the template calls me".to_string()
    }
}

pub fn concrete_one() -> Template {
    Template::new(
        || "Operation 1 done".to_string(),
        || "Operation 2 done".to_string(),
    )
    .with_hook(|| "Using the hook in ConcreteOne".to_string())
}

pub fn concrete_two() -> Template {
    Template::new(
        || "Operation 1 done another way".to_string(),
        || "Operation 2 done another way".to_string(),
    )
}

/* ============================================================
 * Pizza: before hook -> ingredients -> after hook -> cook -> cut -> serve
 * ============================================================
 */

#[derive(Debug, Clone, Copy)]
pub struct PizzaRecipe {
    pub name: &'static str,
    pub before_ingredients: Option<Step>,
    pub add_ingredients: Step,
    pub after_ingredients: Option<Step>,
    pub cook: Step,
}

impl PizzaRecipe {
    pub fn new(name: &'static str, add_ingredients: Step, cook: Step) -> Self {
        PizzaRecipe {
            name,
            before_ingredients: None,
            add_ingredients,
            after_ingredients: None,
            cook,
        }
    }

    pub fn prepare(&self) -> Vec<String> {
        tracing::debug!(pizza = self.name, "preparing");
        let mut out = Vec::with_capacity(6);
        out.extend(self.before_ingredients.map(|hook| hook()));
        out.push((self.add_ingredients)());
        out.extend(self.after_ingredients.map(|hook| hook()));
        out.push((self.cook)());
        out.push(self.cut());
        out.push(self.serve());
        out
    }

    fn cut(&self) -> String {
        format!("Cutting the {} pizza", self.name)
    }

    fn serve(&self) -> String {
        format!("Serving the {} pizza", self.name)
    }
}

pub fn a_moda_da_casa() -> PizzaRecipe {
    PizzaRecipe::new(
        "AModaCasa",
        || "AModaCasa: 2 cheeses, calabresa, sauce, dough".to_string(),
        || "Baking the AModaCasa pizza for 45 min in the wood oven".to_string(),
    )
}

fn wash_ingredients() -> String {
    "Vegan - washing the ingredients".to_string()
}

pub fn vegan() -> PizzaRecipe {
    PizzaRecipe {
        before_ingredients: Some(wash_ingredients),
        ..PizzaRecipe::new(
            "Vegan",
            || "Vegan: eggplant, spinach, parsley, dough, sauce".to_string(),
            || "Baking the Vegan pizza for 10 min in the wood oven".to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hook_runs_first_when_present() {
        let lines = concrete_one().run();
        assert_eq!(
            lines,
            vec![
                "Using the hook in ConcreteOne",
                "Operation 1 done",
                "I belong to the template and the template calls me",
                "Operation 2 done",
            ]
        );
    }

    #[test]
    fn test_missing_hook_is_a_no_op() {
        let lines = concrete_two().run();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Operation 1 done another way");
        assert_eq!(lines[1], concrete_one().run()[2]);
    }

    #[test]
    fn test_pizzas_share_the_same_order() {
        let house = a_moda_da_casa().prepare();
        let vegan = vegan().prepare();

        assert_eq!(house.len(), 4);
        assert_eq!(vegan.len(), 5);
        assert_eq!(vegan[0], "Vegan - washing the ingredients");

        // Fixed tail: cook, cut, serve.
        assert!(house[1].starts_with("Baking the AModaCasa"));
        assert!(vegan[2].starts_with("Baking the Vegan"));
        assert_eq!(&house[2..], ["Cutting the AModaCasa pizza", "Serving the AModaCasa pizza"]);
        assert_eq!(&vegan[3..], ["Cutting the Vegan pizza", "Serving the Vegan pizza"]);
    }

    #[test]
    fn test_after_hook_sits_between_ingredients_and_cooking() {
        fn rest_dough() -> String {
            "resting the dough".to_string()
        }
        let recipe = PizzaRecipe {
            after_ingredients: Some(rest_dough),
            ..a_moda_da_casa()
        };
        let lines = recipe.prepare();
        assert_eq!(lines[1], "resting the dough");
        assert!(lines[2].starts_with("Baking"));
    }
}
