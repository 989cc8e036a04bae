mod stl;
