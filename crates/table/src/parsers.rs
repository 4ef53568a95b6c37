//! Set of useful parser combinators

// internal modules
use crate::nuclide::Nuclide;

// nom parser combinators
use nom::character::complete::{alpha1, one_of};
use nom::combinator::{all_consuming, opt};
use nom::error::{Error, ErrorKind};
use nom::{Err, IResult};

/// Parse string into a nuclide name
///
/// Full is <element><separator><mass number>, e.g. C14, he-4, Li_7
///
/// Separators are optional, the mass number is not
pub(crate) fn nuclide_from_str(i: &str) -> IResult<&str, Nuclide> {
    let (i, symbol) = element(i)?;
    let (i, _) = opt(separator)(i)?;
    let (i, mass) = all_consuming(mass_number)(i)?;

    Ok((
        i,
        Nuclide {
            symbol: symbol.to_string(),
            mass_number: mass,
        },
    ))
}

/// Get the element symbol
fn element(i: &str) -> IResult<&str, &str> {
    let (rest, element) = alpha1(i)?;

    if element.len() > 3 {
        Err(Err::Error(Error::new(i, ErrorKind::Fail)))
    } else {
        Ok((rest, element))
    }
}

/// Get the unsigned mass number
fn mass_number(i: &str) -> IResult<&str, u16> {
    nom::character::complete::u16(i)
}

/// List of possible separators people may use
fn separator(i: &str) -> IResult<&str, char> {
    one_of("_-")(i)
}
