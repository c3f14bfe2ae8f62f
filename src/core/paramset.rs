//! Bundle up parameters and their values in a generic way.
//!
//! Every successful lookup marks the parameter as used. Whatever is
//! left unused after a shape was created is most likely a typo in the
//! scene description and gets reported via **report_unused()**.

// std
use std::cell::Cell;
// others
use log::warn;
// pbrt
use crate::core::geometry::Point3f;
use crate::core::pbrt::Float;

// see paramset.h

pub struct ParamSetItem<T> {
    pub name: String,
    pub values: Vec<T>,
    pub n_values: usize,
    pub looked_up: Cell<bool>, // false
}

impl<T> ParamSetItem<T> {
    fn new(name: String, values: Vec<T>) -> Self {
        let n_values: usize = values.len();
        ParamSetItem {
            name,
            values,
            n_values,
            looked_up: Cell::new(false),
        }
    }
}

#[derive(Default)]
pub struct ParamSet {
    pub bools: Vec<ParamSetItem<bool>>,
    pub ints: Vec<ParamSetItem<i32>>,
    pub floats: Vec<ParamSetItem<Float>>,
    pub point3fs: Vec<ParamSetItem<Point3f>>,
    pub strings: Vec<ParamSetItem<String>>,
}

impl ParamSet {
    pub fn add_float(&mut self, name: String, value: Float) {
        self.floats.push(ParamSetItem::new(name, vec![value]));
    }
    pub fn add_floats(&mut self, name: String, values: Vec<Float>) {
        self.floats.push(ParamSetItem::new(name, values));
    }
    pub fn add_int(&mut self, name: String, value: i32) {
        self.ints.push(ParamSetItem::new(name, vec![value]));
    }
    pub fn add_bool(&mut self, name: String, value: bool) {
        self.bools.push(ParamSetItem::new(name, vec![value]));
    }
    pub fn add_point3f(&mut self, name: String, value: Point3f) {
        self.point3fs.push(ParamSetItem::new(name, vec![value]));
    }
    pub fn add_point3fs(&mut self, name: String, values: Vec<Float>) {
        let n_values: usize = values.len();
        assert!(
            n_values % 3 == 0,
            "point parameters need 3 coordinates ({} found for {:?})",
            n_values,
            name
        );
        let p_values: Vec<Point3f> = values
            .chunks_exact(3)
            .map(|c| Point3f {
                x: c[0],
                y: c[1],
                z: c[2],
            })
            .collect();
        self.point3fs.push(ParamSetItem::new(name, p_values));
    }
    pub fn add_string(&mut self, name: String, value: String) {
        self.strings.push(ParamSetItem::new(name, vec![value]));
    }
    pub fn find_one_float(&self, name: &str, d: Float) -> Float {
        lookup_one(&self.floats, name, d)
    }
    pub fn find_one_int(&self, name: &str, d: i32) -> i32 {
        lookup_one(&self.ints, name, d)
    }
    pub fn find_one_bool(&self, name: &str, d: bool) -> bool {
        lookup_one(&self.bools, name, d)
    }
    pub fn find_one_point3f(&self, name: &str, d: Point3f) -> Point3f {
        lookup_one(&self.point3fs, name, d)
    }
    pub fn find_one_string(&self, name: &str, d: String) -> String {
        lookup_one(&self.strings, name, d)
    }
    /// Names of all parameters nobody asked for.
    pub fn unused(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        collect_unused(&self.bools, &mut names);
        collect_unused(&self.ints, &mut names);
        collect_unused(&self.floats, &mut names);
        collect_unused(&self.point3fs, &mut names);
        collect_unused(&self.strings, &mut names);
        names
    }
    pub fn report_unused(&self) {
        for name in self.unused() {
            warn!("Parameter {:?} not used", name);
        }
    }
}

/// Value of the single-valued entry called `name`, or `d`. Marks the
/// entry as looked up.
pub fn lookup_one<T>(vec: &[ParamSetItem<T>], name: &str, d: T) -> T
where
    T: Clone,
{
    for v in vec {
        if v.name == name && v.n_values == 1_usize {
            v.looked_up.set(true);
            return v.values[0].clone();
        }
    }
    d
}

fn collect_unused<'a, T>(vec: &'a [ParamSetItem<T>], names: &mut Vec<&'a str>) {
    for v in vec {
        if !v.looked_up.get() {
            names.push(v.name.as_str());
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lookups_fall_back_to_defaults() {
        let mut ps: ParamSet = ParamSet::default();
        ps.add_float(String::from("radius"), 2.5);
        ps.add_int(String::from("level"), 3);
        ps.add_bool(String::from("flip"), true);
        ps.add_string(String::from("label"), String::from("frosty"));
        assert_eq!(ps.find_one_float("radius", 1.0), 2.5);
        assert_eq!(ps.find_one_float("height", 1.0), 1.0);
        assert_eq!(ps.find_one_int("level", 0), 3);
        assert!(ps.find_one_bool("flip", false));
        assert_eq!(ps.find_one_string("label", String::new()), "frosty");
    }

    #[test]
    fn multi_valued_items_are_not_single_lookups() {
        let mut ps: ParamSet = ParamSet::default();
        ps.add_floats(String::from("radius"), vec![1.0, 2.0]);
        assert_eq!(ps.find_one_float("radius", 7.0), 7.0);
        ps.add_point3fs(String::from("P"), vec![0.0, 1.0, 2.0]);
        let p: Point3f = ps.find_one_point3f("P", Point3f::default());
        assert_eq!(
            p,
            Point3f {
                x: 0.0,
                y: 1.0,
                z: 2.0
            }
        );
    }

    #[test]
    fn unused_parameters_are_tracked() {
        let mut ps: ParamSet = ParamSet::default();
        ps.add_float(String::from("radiusHead"), 0.5);
        ps.add_float(String::from("raduisBody"), 1.0);
        ps.add_point3f(String::from("posHat"), Point3f::default());
        assert_eq!(ps.unused().len(), 3);
        ps.find_one_float("radiusHead", 0.0);
        ps.find_one_point3f("posHat", Point3f::default());
        assert_eq!(ps.unused(), vec!["raduisBody"]);
    }
}
