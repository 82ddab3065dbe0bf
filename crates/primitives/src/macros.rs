/// Builds an [`OptionSet`](crate::OptionSet) from `key => value` pairs.
///
/// Keys keep their written order. Values go through `Into<OptionValue>`.
///
/// ```
/// use canopy_primitives::{OptionValue, options};
///
/// let set = options! { "draw_children" => true, "order" => 7 };
/// assert_eq!(set.get("order"), Some(&OptionValue::Int(7)));
/// ```
#[macro_export]
macro_rules! options {
	() => {
		$crate::OptionSet::new()
	};
	($($key:expr => $value:expr),+ $(,)?) => {{
		let mut set = $crate::OptionSet::new();
		$(set.insert($key, $value);)+
		set
	}};
}
