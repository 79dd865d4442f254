use std::fmt;

use crate::InputError;

const DISK_SIZE: u64 = 70_000_000;
const NEEDED_FREE: u64 = 30_000_000;
const SMALL_DIR: u64 = 100_000;

#[derive(Debug)]
enum Node {
    Dir {name: String, parent: Option<usize>, children: Vec<usize>},
    File {name: String, size: u64},
}

/// Directory tree in an arena; index 0 is `/`.
#[derive(Debug)]
pub struct FileSystem {nodes: Vec<Node>}

impl FileSystem {
    const ROOT: usize = 0;

    pub fn parse(transcript: &str) -> Result<Self, InputError> {
        let mut fs = FileSystem {nodes: vec![
            Node::Dir {name: "/".to_owned(), parent: None, children: vec![]}
        ]};
        let mut cwd = Self::ROOT;
        for line in transcript.trim().lines().map(str::trim_end) {
            match line.split(' ').collect::<Vec<_>>()[..] {
                ["$", "cd", "/"] => cwd = Self::ROOT,
                ["$", "cd", ".."] => cwd = fs.parent(cwd).ok_or_else(|| InputError::line(line))?,
                ["$", "cd", name] => {
                    cwd = fs.child_dir(cwd, name).ok_or_else(|| InputError::line(line))?
                },
                ["$", "ls"] => (),
                // a repeated `ls` lists entries that are already known
                ["dir", name] => {
                    if fs.child(cwd, name).is_none() {
                        fs.add(cwd, Node::Dir {name: name.to_owned(), parent: Some(cwd), children: vec![]});
                    }
                },
                [size, name] => {
                    let size = size.parse().map_err(|_| InputError::line(line))?;
                    if fs.child(cwd, name).is_none() {
                        fs.add(cwd, Node::File {name: name.to_owned(), size});
                    }
                },
                _ => return Err(InputError::line(line)),
            }
        }
        Ok(fs)
    }

    fn add(&mut self, dir: usize, node: Node) {
        let id = self.nodes.len();
        self.nodes.push(node);
        if let Node::Dir {children, ..} = &mut self.nodes[dir] {children.push(id)}
    }

    fn parent(&self, dir: usize) -> Option<usize> {
        match &self.nodes[dir] {
            Node::Dir {parent, ..} => *parent,
            Node::File {..} => None,
        }
    }

    fn children(&self, dir: usize) -> &[usize] {
        match &self.nodes[dir] {
            Node::Dir {children, ..} => children.as_slice(),
            Node::File {..} => &[],
        }
    }

    fn child(&self, dir: usize, wanted: &str) -> Option<usize> {
        self.children(dir).iter().copied().find(|&child| match &self.nodes[child] {
            Node::Dir {name, ..} | Node::File {name, ..} => name == wanted,
        })
    }

    fn child_dir(&self, dir: usize, wanted: &str) -> Option<usize> {
        self.children(dir).iter().copied().find(|&child|
            matches!(&self.nodes[child], Node::Dir {name, ..} if name == wanted)
        )
    }

    /// Looks up a directory by its path components below `/`.
    pub fn dir(&self, path: &[&str]) -> Option<usize> {
        path.iter().try_fold(Self::ROOT, |dir, name| self.child_dir(dir, name))
    }

    pub fn size(&self, node: usize) -> u64 {
        match &self.nodes[node] {
            Node::File {size, ..} => *size,
            Node::Dir {children, ..} => children.iter().map(|&child| self.size(child)).sum(),
        }
    }

    /// Sizes of every directory, computed bottom-up in one pass.
    pub fn dir_sizes(&self) -> Vec<u64> {
        let mut sizes = vec![0; self.nodes.len()];
        // children always have larger ids than their parent
        for id in (0 .. self.nodes.len()).rev() {
            match &self.nodes[id] {
                Node::File {size, ..} => sizes[id] = *size,
                Node::Dir {children, ..} => sizes[id] = children.iter().map(|&c| sizes[c]).sum(),
            }
        }
        self.nodes.iter().zip(sizes).filter_map(|(node, size)|
            matches!(node, Node::Dir {..}).then_some(size)
        ).collect()
    }

    fn write_node(&self, f: &mut fmt::Formatter<'_>, node: usize, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match &self.nodes[node] {
            Node::File {name, size} => write!(f, "{}- {} (file, size={})", indent, name, size),
            Node::Dir {name, children, ..} => {
                write!(f, "{}- {} (dir)", indent, name)?;
                for &child in children {
                    writeln!(f)?;
                    self.write_node(f, child, depth + 1)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for FileSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_node(f, Self::ROOT, 0)
    }
}

pub fn solve(part: u8, input: &str) -> anyhow::Result<String> {
    let fs = FileSystem::parse(input)?;
    let sizes = fs.dir_sizes();
    if part == 1 {
        Ok(sizes.iter().filter(|&&size| size <= SMALL_DIR).sum::<u64>().to_string())
    } else {
        let used = sizes[0];
        let must_free = (used + NEEDED_FREE).saturating_sub(DISK_SIZE);
        sizes.iter().filter(|&&size| size > must_free).min()
             .map(u64::to_string).ok_or_else(|| InputError::NoSolution.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
$ cd /
$ ls
dir a
14848514 b.txt
8504156 c.dat
dir d
$ cd a
$ ls
dir e
29116 f
2557 g
62596 h.lst
$ cd e
$ ls
584 i
$ cd ..
$ cd ..
$ cd d
$ ls
4060174 j
8033020 d.log
5626152 d.ext
7214296 k
";

    const RENDERED: &str = "\
- / (dir)
  - a (dir)
    - e (dir)
      - i (file, size=584)
    - f (file, size=29116)
    - g (file, size=2557)
    - h.lst (file, size=62596)
  - b.txt (file, size=14848514)
  - c.dat (file, size=8504156)
  - d (dir)
    - j (file, size=4060174)
    - d.log (file, size=8033020)
    - d.ext (file, size=5626152)
    - k (file, size=7214296)";

    #[test]
    fn example() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "95437");
        assert_eq!(solve(2, EXAMPLE).unwrap(), "24933642");
    }

    #[test]
    fn tree_shape() {
        let fs = FileSystem::parse(EXAMPLE).unwrap();
        assert_eq!(fs.to_string(), RENDERED);
        assert_eq!(fs.size(0), 48_381_165);
        assert_eq!(fs.size(fs.dir(&["a", "e"]).unwrap()), 584);
        assert_eq!(fs.size(fs.dir(&["a"]).unwrap()), 94_853);
        assert_eq!(fs.size(fs.dir(&["d"]).unwrap()), 24_933_642);
        assert_eq!(fs.dir(&["a", "x"]), None);
    }

    #[test]
    fn listing_twice_counts_once() {
        let once = "$ cd /\n$ ls\n100 a\ndir b\n";
        let twice = format!("{}$ ls\n100 a\ndir b\n", once);
        let fs = FileSystem::parse(&twice).unwrap();
        assert_eq!(fs.size(0), 100);
        assert_eq!(fs.to_string(), FileSystem::parse(once).unwrap().to_string());
        assert_eq!(solve(1, &twice).unwrap(), "100");
    }

    #[test]
    fn cd_into_unknown_dir() {
        assert!(FileSystem::parse("$ cd /\n$ cd nowhere\n").is_err());
        assert!(FileSystem::parse("$ cd ..\n").is_err());
    }
}
