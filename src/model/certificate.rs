// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! A certificate is the json file in which a solver run stores its selection.

use std::{fs::File, io::{BufReader, BufWriter, Read, Write}, path::Path};

use serde::{Deserialize, Serialize};

use crate::{Error, Selection};

/// The on-disk representation of a selection. Duplicate or conflicting items
/// are representable: they are only detected when the certificate gets
/// evaluated against an instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub items: Selection,
}

impl Certificate {
    pub fn new(items: Selection) -> Self {
        Self { items }
    }
    pub fn from_file<P: AsRef<Path>>(fname: P) -> Result<Self, Error> {
        Self::from_reader(BufReader::new(File::open(fname)?))
    }
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        Ok(serde_json::from_reader(reader)?)
    }
    pub fn write<P: AsRef<Path>>(&self, fname: P) -> Result<(), Error> {
        let mut out = BufWriter::new(File::create(fname)?);
        serde_json::to_writer(&mut out, self)?;
        out.flush()?;
        Ok(())
    }
}
