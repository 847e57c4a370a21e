use std::{
	io,
	fs,
	path::{Path, PathBuf},
};

use crate::source::Source;


/// Run the test for every file under the given directory, relative to the crate root.
pub fn test_dir<P, F>(path: P, mut test: F) -> io::Result<usize>
where
	P: AsRef<Path>,
	F: FnMut(&Source),
{
	let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	dir.push(path);

	fn run<F>(dir: &Path, test: &mut F) -> io::Result<usize>
	where
		F: FnMut(&Source),
	{
		let mut count = 0;

		for entry in fs::read_dir(dir)? {
			let path = entry?.path();

			if path.is_dir() {
				count += run(&path, test)?;
			} else {
				let source = Source::from_path(path)?;
				test(&source);
				count += 1;
			}
		}

		Ok(count)
	}

	run(&dir, &mut test)
}
