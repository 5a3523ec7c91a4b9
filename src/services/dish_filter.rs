//! Search predicates for dishes.
//!
//! A request is first turned into a small [`Predicate`] tree and only then
//! translated into a SeaORM [`Condition`]. Axis membership is expressed as a
//! semi-join (`platillos.id IN (SELECT ...)`), so a dish matching several
//! tags on one axis is still returned once.

use sea_orm::sea_query::{Expr, Query, SimpleExpr};
use sea_orm::{ColumnTrait, Condition};

use crate::entities::{dish, dish_category, dish_ingredient, dish_label, Axis, TagEntity, TagLink};
use crate::models::dish_model::SearchParams;

/// Dish columns the free-text term is matched against.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TextField {
    Name,
    Description,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Predicate {
    /// Satisfied by every row.
    MatchAll,
    /// Case-insensitive substring match.
    Contains { field: TextField, term: String },
    /// The dish has at least one tag on `axis` whose name is in `names`.
    /// An empty `names` list can never be satisfied.
    TaggedWith { axis: Axis, names: Vec<String> },
    All(Vec<Predicate>),
    Any(Vec<Predicate>),
}

impl Predicate {
    /// Builds the predicate for a search request.
    ///
    /// The text term is OR'd across name and description; every axis present
    /// in the request is AND'd on top of it.
    pub fn from_search(params: &SearchParams) -> Predicate {
        let term = params.q.as_deref().unwrap_or("").trim();

        let text = if term.is_empty() {
            Predicate::MatchAll
        } else {
            Predicate::Any(vec![
                Predicate::Contains { field: TextField::Name, term: term.to_string() },
                Predicate::Contains { field: TextField::Description, term: term.to_string() },
            ])
        };

        let mut clauses = vec![text];
        for axis in Axis::ALL {
            let raw = match axis {
                Axis::Categorias => params.categorias.as_deref(),
                Axis::Etiquetas => params.etiquetas.as_deref(),
                Axis::Ingredientes => params.ingredientes.as_deref(),
            };
            if let Some(raw) = raw {
                clauses.push(Predicate::TaggedWith { axis, names: split_tag_list(raw) });
            }
        }

        Predicate::All(clauses)
    }

    pub fn into_condition(self) -> Condition {
        match self {
            Predicate::MatchAll => Condition::all(),
            Predicate::Contains { field, term } => Condition::all().add(contains(field, &term)),
            Predicate::TaggedWith { axis, names } => Condition::all().add(match axis {
                Axis::Categorias => tagged_with::<dish_category::Entity>(names),
                Axis::Etiquetas => tagged_with::<dish_label::Entity>(names),
                Axis::Ingredientes => tagged_with::<dish_ingredient::Entity>(names),
            }),
            Predicate::All(children) => children
                .into_iter()
                .fold(Condition::all(), |cond, child| cond.add(child.into_condition())),
            Predicate::Any(children) => children
                .into_iter()
                .fold(Condition::any(), |cond, child| cond.add(child.into_condition())),
        }
    }
}

/// Splits a comma-separated list of tag names. Blank segments are dropped,
/// so `""` yields an empty list.
pub fn split_tag_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

fn contains(field: TextField, term: &str) -> SimpleExpr {
    let column = match field {
        TextField::Name => dish::Column::Name,
        TextField::Description => dish::Column::Description,
    };
    let pattern = format!("%{}%", escape_like(term));

    // Both sides fold through the store's LOWER, so an exact-case term always
    // matches. SQLite's LOWER only folds ASCII.
    Expr::cust_with_exprs(
        "LOWER($1) LIKE LOWER($2) ESCAPE $3",
        [
            SimpleExpr::from(Expr::col((dish::Entity, column))),
            SimpleExpr::from(Expr::val(pattern)),
            SimpleExpr::from(Expr::val("\\")),
        ],
    )
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn tagged_with<L: TagLink>(names: Vec<String>) -> SimpleExpr {
    if names.is_empty() {
        return Expr::val(1).eq(0);
    }

    let (link, tag) = (L::default(), <L::Tag as Default>::default());
    let tagged_dishes = Query::select()
        .column((link, L::DISH_ID))
        .from(link)
        .inner_join(
            tag,
            Expr::col((tag, <L::Tag as TagEntity>::ID)).equals((link, L::TAG_ID)),
        )
        .and_where(Expr::col((tag, <L::Tag as TagEntity>::NAME)).is_in(names))
        .to_owned();

    dish::Column::Id.in_subquery(tagged_dishes)
}
